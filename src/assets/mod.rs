pub(crate) mod decode;
pub(crate) mod table;
pub(crate) mod text;
