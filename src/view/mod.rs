pub(crate) mod shimmer_view;
