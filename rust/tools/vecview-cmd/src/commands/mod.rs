//! Command implementations for vecview-cmd

use vecview::View;

pub mod aliasing;
pub mod append;
pub mod slicing;

/// Prints a view alongside its length and capacity, the shape every
/// walkthrough uses.
pub fn print_view<T: std::fmt::Debug>(label: &str, view: &View<T>) {
    println!(
        "{label} = {view:?} len={} cap={}",
        view.len(),
        view.capacity()
    );
}
