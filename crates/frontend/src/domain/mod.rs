pub mod a001_empresa;
pub mod a002_persona;
pub mod a003_punto_venta;
pub mod a004_caja;
pub mod a005_caja_usuario;
pub mod a006_caja_chica_autorizada;
pub mod a007_rol;
pub mod a009_config_interes_mora;
pub mod a010_feriado_global;
pub mod a011_cliente_inmobiliario;
pub mod a012_plan_pago;
