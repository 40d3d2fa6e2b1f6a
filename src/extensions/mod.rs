pub mod float_ext;
pub mod path_ext;
