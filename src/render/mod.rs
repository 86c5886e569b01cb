pub(crate) mod canvas;
pub(crate) mod composite;
pub(crate) mod gradient;
pub(crate) mod layer;
pub(crate) mod ornament;
pub(crate) mod pipeline;
pub(crate) mod table;
