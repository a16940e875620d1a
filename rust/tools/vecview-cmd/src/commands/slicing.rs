//! Slicing command: construction modes and re-slicing rules.

use anyhow::Result;
use vecview::{Buffer, View};

use crate::commands::print_view;

pub fn run() -> Result<()> {
    println!("-- slicing --");

    // A fixed buffer and a view over part of it: the view keeps the whole
    // tail of the buffer as capacity.
    let arr = Buffer::from_vec(vec![1, 2, 3, 4, 5]);
    let s = View::over(arr, 1, 4)?;
    print_view("s", &s);

    // Re-slicing a view shares the buffer and shifts the window.
    let s1 = s.slice(1, 3)?;
    print_view("s1", &s1);

    // A literal view: length and capacity equal the element count.
    let s2 = View::from_vec(vec![1, 2, 3]);
    print_view("s2", &s2);

    // Allocated with a length only, default-filled.
    let s3 = View::<i32>::zeroed(3);
    print_view("s3", &s3);

    // Allocated with separate length and capacity; writes are checked
    // against the length, not the capacity.
    let s4 = View::<i32>::zeroed_with_capacity(3, 5)?;
    s4.set(0, 5)?;
    s4.set(2, 10)?;
    print_view("s4", &s4);
    if let Err(err) = s4.set(3, 20) {
        println!("s4.set(3): {err}");
    }

    // A nil view has no backing buffer; an empty view does.
    let nil = View::<i32>::nil();
    print_view("nil", &nil);
    println!("nil has_buffer: {}", nil.has_buffer());

    let empty = View::<i32>::from_vec(Vec::new());
    print_view("empty", &empty);
    println!("empty has_buffer: {}", empty.has_buffer());

    let empty2 = View::<i32>::zeroed_with_capacity(0, 0)?;
    print_view("empty2", &empty2);
    println!("empty2 has_buffer: {}", empty2.has_buffer());

    Ok(())
}
