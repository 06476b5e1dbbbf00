use std::borrow::Cow;

/// One `[id name="value" ...]` group of the STRUCTURED-DATA field.
///
/// Params keep the order they were written in; names are unique within an
/// element. Values are already unescaped and borrow from the input line
/// unless unescaping had to allocate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructuredElement<'a> {
    pub id: &'a str,
    pub params: Vec<(&'a str, Cow<'a, str>)>,
}

impl<'a> StructuredElement<'a> {
    /// The decoded value of param `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_ref())
    }

    /// The name part of the id, i.e. everything before `@`.
    pub fn name(&self) -> &'a str {
        match self.id.split_once('@') {
            Some((name, _)) => name,
            None => self.id,
        }
    }

    /// The private enterprise number of `name@enterprise-number` ids.
    /// IANA-registered ids (no `@`) have none.
    pub fn enterprise_number(&self) -> Option<&'a str> {
        self.id.split_once('@').map(|(_, number)| number)
    }
}
