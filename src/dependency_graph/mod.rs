/// Domain layer - the dependency graph aggregate and the algorithms over it
///
/// Nothing in here performs I/O directly; the builder reaches the outside
/// world only through the `DependencySource` port.
pub mod domain;
pub mod services;
