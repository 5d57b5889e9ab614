pub(crate) mod blocks;
