/* Repository: the loaded schema plus the delegate-name memoization table. */

use crate::schema::types::{AttributeFacade, AttributeInfo, AttributeRequest, AttributeType};
use indexmap::IndexMap;

/* Holds everything emitters read during a run. The delegate table is a
 * memoizing lookup keyed by (category, options): the first request wins and
 * every later request with an equal key resolves to the same declaration.
 * Insertion order is preserved so delegate declarations come out in the
 * order they were first requested.
 */
#[derive(Debug, Default)]
pub struct Repository {
    attributes: IndexMap<String, AttributeInfo>,
    facades: Vec<AttributeFacade>,
    events: Vec<AttributeInfo>,
    delegates: IndexMap<(AttributeType, Vec<String>), AttributeRequest>,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare_attribute(&mut self, attribute: AttributeInfo) {
        self.attributes
            .entry(attribute.name.clone())
            .or_insert(attribute);
    }

    pub fn declare_facade(&mut self, facade: AttributeFacade) {
        self.facades.push(facade);
    }

    pub fn declare_event(&mut self, attribute: AttributeInfo) {
        self.events.push(attribute);
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeInfo> {
        self.attributes.get(name)
    }

    pub fn attributes(&self) -> impl Iterator<Item = &AttributeInfo> {
        self.attributes.values()
    }

    pub fn facades(&self) -> &[AttributeFacade] {
        &self.facades
    }

    pub fn events(&self) -> &[AttributeInfo] {
        &self.events
    }

    /* Memoized lookup: returns the request registered for this key, inserting
     * the given one only if the key was never seen (first-request-wins).
     */
    pub fn resolve_delegate(&mut self, request: AttributeRequest) -> &AttributeRequest {
        let key = (request.attr_type, request.options.clone());
        self.delegates.entry(key).or_insert(request)
    }

    /* Resolve the delegate request for one attribute's declared type */
    pub fn request_for(&mut self, attribute: &AttributeInfo) -> AttributeRequest {
        let request = AttributeRequest::for_attribute(attribute);
        self.resolve_delegate(request).clone()
    }

    /* Registered delegate requests, in first-request order */
    pub fn delegate_requests(&self) -> impl Iterator<Item = &AttributeRequest> {
        self.delegates.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_delegate_is_first_request_wins() {
        let mut repository = Repository::new();
        let first = AttributeRequest::new(AttributeType::String, "String", vec![]);
        let second = AttributeRequest::new(AttributeType::String, "CharSequence", vec![]);

        let name_a = repository.resolve_delegate(first).delegate_property_name.clone();
        let resolved = repository.resolve_delegate(second);

        assert_eq!(resolved.delegate_property_name, name_a);
        /* The first registration's type name survives */
        assert_eq!(resolved.type_name, "String");
        assert_eq!(repository.delegate_requests().count(), 1);
    }

    #[test]
    fn distinct_options_yield_distinct_delegates() {
        let mut repository = Repository::new();
        repository.resolve_delegate(AttributeRequest::new(
            AttributeType::Boolean,
            "Boolean",
            vec!["\"true\"".into(), "\"false\"".into()],
        ));
        repository.resolve_delegate(AttributeRequest::new(
            AttributeType::Boolean,
            "Boolean",
            vec!["\"on\"".into(), "\"off\"".into()],
        ));

        let names: Vec<_> = repository
            .delegate_requests()
            .map(|req| req.delegate_property_name.clone())
            .collect();
        assert_eq!(names, vec!["attributeBooleanTrueFalse", "attributeBooleanOnOff"]);
    }

    #[test]
    fn delegate_order_follows_first_request() {
        let mut repository = Repository::new();
        let enum_attr = {
            let mut attr = AttributeInfo::new("dir", "dir");
            attr.attr_type = AttributeType::Enum;
            attr.enum_type_name = Some("Dir".to_string());
            attr
        };
        repository.request_for(&enum_attr);
        repository.request_for(&AttributeInfo::new("accesskey", "accessKey"));
        repository.request_for(&enum_attr);

        let names: Vec<_> = repository
            .delegate_requests()
            .map(|req| req.delegate_property_name.as_str())
            .collect();
        assert_eq!(names, vec!["attributeEnumDirValues", "attributeStringString"]);
    }
}
