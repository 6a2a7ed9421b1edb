pub mod permisos;
