pub mod d400_ventas;
