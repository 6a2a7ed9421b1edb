use super::EntityId;
use crate::shared::proxy::Resource;

/// Root of every back-office record.
///
/// Besides the instance data (`id`, `display_name`) it carries the static
/// metadata the UI needs: where the record lives behind the proxy and how the
/// element and the list are called on screen.
pub trait AggregateRoot {
    /// Record id assigned by the backend
    fn id(&self) -> EntityId;

    /// Human readable label used in selects, confirmations and lookups
    fn display_name(&self) -> String;

    /// Aggregate index in the system (e.g. "a004")
    fn aggregate_index() -> &'static str;

    /// Service and path behind the proxy
    fn resource() -> Resource;

    /// Singular name shown in forms ("Caja")
    fn element_name() -> &'static str;

    /// Plural name shown in lists and tabs ("Cajas")
    fn list_name() -> &'static str;
}
