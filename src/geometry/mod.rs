pub mod triangle;
pub mod delaunay;
