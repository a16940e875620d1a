//! Aliasing command: shared-buffer visibility between views.

use anyhow::Result;
use vecview::View;

use crate::commands::print_view;

/// Mutates and extends a view handed in by a caller. While the append
/// stays within capacity, both effects land in the caller's buffer.
fn change(z: View<i32>) -> Result<View<i32>> {
    z.set(0, 10)?;
    Ok(z.push(11))
}

pub fn run() -> Result<()> {
    println!("-- aliasing --");

    // Two views over one buffer: both appends below stay within capacity,
    // so both write index 3 of the same buffer and the second wins.
    let mut x = View::<i32>::nil();
    x = x.push(1);
    x = x.push(2);
    x = x.push(3);
    let y = x.clone();
    let x = x.push(4);
    let y = y.push(5);
    x.set(0, 10)?;
    print_view("x", &x);
    print_view("y", &y);
    println!("x and y share a buffer: {}", x.shares_buffer(&y));

    // A view passed to a function is a handle to the same buffer: the
    // callee's write and in-capacity append are visible to the caller.
    let mut x = View::from_vec(vec![1, 2, 3, 4, 5]);
    x = x.append(&[6, 7]);
    let a = x.slice(4, 7)?;
    print_view("a", &a);

    let y = change(a)?;
    print_view("x", &x);
    print_view("y", &y);
    print_view("x[0:8]", &x.slice(0, 8)?);

    Ok(())
}
