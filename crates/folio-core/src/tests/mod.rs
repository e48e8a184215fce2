mod serde_shapes;
