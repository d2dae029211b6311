//! Macros to reduce boilerplate in layer implementations
//!
//! Every layer keeps its identity in a `LayerProperties` field; this macro
//! forwards the `LayerTrait` accessors to it.

/// Implements the property-backed part of `LayerTrait`:
/// - id(), name(), layer_type()
/// - as_any()
///
/// Usage:
/// ```ignore
/// impl LayerTrait for MyLayer {
///     quakemap::impl_layer_trait!(MyLayer, properties);
///     // options() and bounds() by hand
/// }
/// ```
#[macro_export]
macro_rules! impl_layer_trait {
    ($layer_type:ty, $properties_field:ident) => {
        fn id(&self) -> &str {
            &self.$properties_field.id
        }

        fn name(&self) -> &str {
            &self.$properties_field.name
        }

        fn layer_type(&self) -> $crate::layers::base::LayerType {
            self.$properties_field.layer_type
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
    };
}
