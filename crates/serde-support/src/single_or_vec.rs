use serde_json::Value;

/// Helper that accepts either a single value or an array.
///
/// FHIR allows most repeatable elements to appear either once or multiple times
/// depending on the instance's actual cardinality. JSON carries enough
/// structure (`[]` vs scalar) to tell them apart, but the XML stream does not
/// embed the schema-driven cardinality constraints: a single `<given>` child
/// arrives as a scalar. List readers normalize through `SingleOrVec` so both
/// shapes are accepted without schema knowledge.
#[derive(Clone, Debug, PartialEq)]
pub struct SingleOrVec<T>(Vec<T>);

impl<T> SingleOrVec<T> {
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> AsRef<[T]> for SingleOrVec<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T> From<SingleOrVec<T>> for Vec<T> {
    #[inline]
    fn from(wrapper: SingleOrVec<T>) -> Self {
        wrapper.0
    }
}

impl<T> Default for SingleOrVec<T> {
    #[inline]
    fn default() -> Self {
        SingleOrVec(Vec::new())
    }
}

// `null` array items become `None` so positions stay aligned with `_name`.
impl From<Option<Value>> for SingleOrVec<Option<Value>> {
    fn from(value: Option<Value>) -> Self {
        match value {
            None | Some(Value::Null) => SingleOrVec::default(),
            Some(Value::Array(items)) => SingleOrVec(
                items
                    .into_iter()
                    .map(|item| if item.is_null() { None } else { Some(item) })
                    .collect(),
            ),
            Some(single) => SingleOrVec(vec![Some(single)]),
        }
    }
}
