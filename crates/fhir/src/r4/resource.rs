use super::*;
use meridian_serde_support::{CodecError, FhirCodec, FhirResource, Result};
use serde_json::Value;

macro_rules! resources {
    ($($name:ident),* $(,)?) => {
        /// Any R4 resource, selected by its `resourceType`.
        ///
        /// Variants are boxed so the enum stays pointer sized; resources nest
        /// through `contained` and `Bundle.entry.resource`.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Resource {
            $($name(Box<$name>),)*
        }

        impl Resource {
            pub fn resource_type(&self) -> &'static str {
                match self {
                    $(Resource::$name(_) => <$name as FhirResource>::RESOURCE_TYPE,)*
                }
            }

            /// Logical id of the resource, when it has one.
            pub fn id(&self) -> Option<&str> {
                match self {
                    $(Resource::$name(r) => r.id.as_ref().and_then(|id| id.value.as_deref()),)*
                }
            }
        }

        $(
            impl From<$name> for Resource {
                fn from(resource: $name) -> Self {
                    Resource::$name(Box::new(resource))
                }
            }
        )*

        impl FhirCodec for Resource {
            fn encode_value(&self) -> Result<Option<Value>> {
                match self {
                    $(Resource::$name(r) => r.encode_value(),)*
                }
            }

            fn decode_parts(value: Option<Value>, _meta: Option<Value>) -> Result<Self> {
                let resource_type = match value.as_ref().and_then(|v| v.get("resourceType")) {
                    Some(Value::String(resource_type)) => resource_type.clone(),
                    Some(other) => return Err(CodecError::UnknownResourceType(other.to_string())),
                    None => return Err(CodecError::MissingResourceType),
                };
                $(
                    if resource_type == <$name as FhirResource>::RESOURCE_TYPE {
                        return $name::decode_parts(value, None).map(Resource::from);
                    }
                )*
                Err(CodecError::UnknownResourceType(resource_type))
            }
        }
    };
}

resources! {
    ActivityDefinition,
    Bundle,
    EffectEvidenceSynthesis,
    GraphDefinition,
    Observation,
    Patient,
    PlanDefinition,
    RiskEvidenceSynthesis,
}

impl serde::Serialize for Resource {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        meridian_serde_support::serialize_with(self, serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Resource {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        meridian_serde_support::deserialize_with(deserializer)
    }
}
