mod cell;
mod grid;
mod view;

pub use cell::Cell;
pub use grid::Grid;
pub use view::ViewMapping;
