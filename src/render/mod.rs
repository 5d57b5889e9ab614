pub(crate) mod canvas;
pub(crate) mod capture;
pub(crate) mod composite;
pub(crate) mod frame;
pub(crate) mod gradient;
pub(crate) mod surface;
