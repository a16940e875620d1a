//! Append command: growth and reallocation behavior.

use anyhow::Result;
use vecview::View;

use crate::commands::print_view;

pub fn run() -> Result<()> {
    println!("-- append --");

    // Growing from nil: each reallocation doubles the capacity.
    let mut x = View::<i32>::nil();
    for i in 1..=5 {
        x = x.push(i);
        print_view("x", &x);
    }

    // A full literal reallocates on the next append: capacity 5 becomes 10.
    let mut x = View::from_vec(vec![1, 2, 3, 4, 5]);
    x = x.push(6);
    x = x.push(7);
    print_view("x", &x);

    // Re-slicing past the length, up to the capacity, exposes the
    // capacity-backed slots (still default-filled here).
    let wide = x.slice(0, 8)?;
    print_view("x[0:8]", &wide);

    // At 1024 the growth switches from doubling to 25% steps.
    let mut v = View::<i32>::zeroed(1024);
    let before = v.capacity();
    v = v.push(0);
    println!("cap {} -> cap {}", before, v.capacity());

    Ok(())
}
