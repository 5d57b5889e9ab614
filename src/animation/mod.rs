pub(crate) mod deferred;
pub(crate) mod ease;
pub(crate) mod progression;
pub(crate) mod sweep;
