//! Pure construction of the catalog descriptors for a CSV file.
//!
//! [`DescriptorBuilder::build`] is total: every request yields a graph.
//! Delimiter and quote are always resolved to a concrete value, the schema is
//! built only when column headers are supplied, and both property maps are
//! assembled as finished values at the end.

use crate::descriptor::{
    AssetDescriptor, AssetGraph, ConnectionDescriptor, ConnectorTypeDescriptor,
    EndpointDescriptor, SchemaAttribute, SchemaDescriptor,
};
use crate::identity::{
    asset_qualified_name, connection_qualified_name, endpoint_qualified_name, CatalogIdentities,
    CONNECTOR_TYPE_QUALIFIED_NAME, CSV_FILE_TYPE_NAME,
};
use crate::properties::{
    collect_present, PropertyMap, PropertyValue, COLUMN_NAMES_CONFIG_PROPERTY,
    DEFAULT_DELIMITER, DEFAULT_QUOTE, DELIMITER_CONFIG_PROPERTY, DELIMITER_PROPERTY,
    QUOTE_CONFIG_PROPERTY, QUOTE_PROPERTY,
};
use crate::request::OnboardingRequest;

/// Builds [`AssetGraph`] values using a fixed set of [`CatalogIdentities`].
#[derive(Debug, Clone, Default)]
pub struct DescriptorBuilder {
    identities: CatalogIdentities,
}

impl DescriptorBuilder {
    #[must_use]
    pub fn new(identities: CatalogIdentities) -> Self {
        Self { identities }
    }

    #[must_use]
    pub fn identities(&self) -> &CatalogIdentities {
        &self.identities
    }

    /// Builds the asset, optional schema and connection for `request`.
    #[must_use]
    pub fn build(&self, request: &OnboardingRequest) -> AssetGraph {
        let delimiter = request.delimiter.unwrap_or(DEFAULT_DELIMITER);
        let quote = request.quote.unwrap_or(DEFAULT_QUOTE);

        let asset = AssetDescriptor {
            type_name: CSV_FILE_TYPE_NAME.to_string(),
            qualified_name: asset_qualified_name(&request.full_path),
            display_name: request.display_name.clone(),
            description: request.description.clone(),
            extended_properties: extended_properties(delimiter, quote),
        };

        let schema = request
            .column_headers
            .as_deref()
            .map(|headers| build_schema(&asset, headers));

        let connection = self.build_connection(request, delimiter, quote);

        AssetGraph {
            asset,
            schema,
            connection,
        }
    }

    fn build_connection(
        &self,
        request: &OnboardingRequest,
        delimiter: char,
        quote: char,
    ) -> ConnectionDescriptor {
        let full_path = &request.full_path;

        let endpoint = EndpointDescriptor {
            guid: self.identities.endpoint_guid.clone(),
            qualified_name: endpoint_qualified_name(full_path),
            address: full_path.clone(),
        };

        let connector_type = ConnectorTypeDescriptor {
            guid: self.identities.connector_type_guid.clone(),
            qualified_name: CONNECTOR_TYPE_QUALIFIED_NAME.to_string(),
            connector_provider: self.identities.connector_provider.clone(),
        };

        let configuration = collect_present([
            (DELIMITER_CONFIG_PROPERTY, Some(PropertyValue::Char(delimiter))),
            (QUOTE_CONFIG_PROPERTY, Some(PropertyValue::Char(quote))),
            (
                COLUMN_NAMES_CONFIG_PROPERTY,
                request.column_headers.clone().map(PropertyValue::StringList),
            ),
        ]);

        ConnectionDescriptor {
            guid: self.identities.connection_guid.clone(),
            qualified_name: connection_qualified_name(full_path),
            endpoint,
            connector_type,
            configuration_properties: (!configuration.is_empty()).then_some(configuration),
        }
    }
}

fn extended_properties(delimiter: char, quote: char) -> PropertyMap {
    PropertyMap::from([
        (DELIMITER_PROPERTY.to_string(), PropertyValue::Char(delimiter)),
        (QUOTE_PROPERTY.to_string(), PropertyValue::Char(quote)),
    ])
}

fn build_schema(asset: &AssetDescriptor, headers: &[String]) -> SchemaDescriptor {
    let qualified_name = format!("{}::Schema", asset.qualified_name);
    let attributes = headers
        .iter()
        .enumerate()
        .map(|(position, header)| SchemaAttribute {
            qualified_name: format!("{qualified_name}::{header}"),
            name: header.clone(),
            position,
        })
        .collect();

    SchemaDescriptor {
        display_name: format!("{} Schema", asset.display_name),
        qualified_name,
        attributes,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn build(request: &OnboardingRequest) -> AssetGraph {
        DescriptorBuilder::default().build(request)
    }

    // --- Scenario A: headers supplied, separators defaulted ---

    #[test]
    fn headers_with_default_separators() {
        let req = OnboardingRequest::new("/data/x.csv", "x", "x file").with_column_headers(["a", "b"]);
        let graph = build(&req);

        assert_eq!(graph.asset.qualified_name, "CSVFile:/data/x.csv");
        assert_eq!(graph.asset.type_name, "CSVFile");

        let schema = graph.schema.expect("schema should be present");
        assert_eq!(schema.attribute_names().collect::<Vec<_>>(), vec!["a", "b"]);

        assert_eq!(graph.asset.delimiter(), Some(','));
        assert_eq!(graph.asset.quote(), Some('"'));
        assert_eq!(graph.asset.extended_properties.len(), 2);
    }

    // --- Scenario B: no headers, caller separators ---

    #[test]
    fn no_headers_with_caller_separators() {
        let req = OnboardingRequest::new("/data/y.csv", "y", "")
            .with_delimiter(';')
            .with_quote('\'');
        let graph = build(&req);

        assert!(graph.schema.is_none());
        assert_eq!(graph.asset.delimiter(), Some(';'));
        assert_eq!(graph.asset.quote(), Some('\''));
        assert!(graph
            .connection
            .configuration_property(COLUMN_NAMES_CONFIG_PROPERTY)
            .is_none());
        assert_eq!(
            graph.connection.configuration_property(DELIMITER_CONFIG_PROPERTY),
            Some(&PropertyValue::Char(';'))
        );
        assert_eq!(
            graph.connection.configuration_property(QUOTE_CONFIG_PROPERTY),
            Some(&PropertyValue::Char('\''))
        );
    }

    #[test]
    fn empty_header_list_yields_empty_schema_not_absent() {
        let req = OnboardingRequest::new("/data/e.csv", "e", "").with_column_headers(Vec::<String>::new());
        let graph = build(&req);

        let schema = graph.schema.expect("empty header list still produces a schema");
        assert!(schema.attributes.is_empty());
        assert_eq!(
            graph
                .connection
                .configuration_property(COLUMN_NAMES_CONFIG_PROPERTY)
                .and_then(PropertyValue::as_string_list),
            Some(&[][..])
        );
    }

    #[test]
    fn schema_names_derive_from_asset() {
        let req = OnboardingRequest::new("/d/z.csv", "Zed", "").with_column_headers(["id"]);
        let schema = build(&req).schema.unwrap();

        assert_eq!(schema.qualified_name, "CSVFile:/d/z.csv::Schema");
        assert_eq!(schema.display_name, "Zed Schema");
        assert_eq!(schema.attributes[0].qualified_name, "CSVFile:/d/z.csv::Schema::id");
        assert_eq!(schema.attributes[0].position, 0);
    }

    #[test]
    fn connection_uses_injected_identities() {
        let identities = CatalogIdentities {
            endpoint_guid: "ep".to_string(),
            connector_type_guid: "ct".to_string(),
            connection_guid: "cn".to_string(),
            connector_provider: "test-provider".to_string(),
        };
        let builder = DescriptorBuilder::new(identities);
        let conn = builder
            .build(&OnboardingRequest::new("/data/x.csv", "x", ""))
            .connection;

        assert_eq!(conn.guid, "cn");
        assert_eq!(conn.endpoint.guid, "ep");
        assert_eq!(conn.connector_type.guid, "ct");
        assert_eq!(conn.connector_type.connector_provider, "test-provider");
        assert_eq!(conn.endpoint.address, "/data/x.csv");
        assert_eq!(conn.qualified_name, "/data/x.csvStructured File Store Connection");
        assert_eq!(conn.endpoint.qualified_name, "/data/x.csv File Endpoint");
        assert_eq!(conn.connector_type.qualified_name, CONNECTOR_TYPE_QUALIFIED_NAME);
    }

    #[test]
    fn column_names_are_passed_to_connector_in_order() {
        let req = OnboardingRequest::new("/data/x.csv", "x", "").with_column_headers(["c", "a", "b"]);
        let conn = build(&req).connection;
        let names = conn
            .configuration_property(COLUMN_NAMES_CONFIG_PROPERTY)
            .and_then(PropertyValue::as_string_list)
            .unwrap();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn description_and_display_name_copied_verbatim() {
        let req = OnboardingRequest::new("/p.csv", "  Spaced Name ", "multi\nline");
        let asset = build(&req).asset;
        assert_eq!(asset.display_name, "  Spaced Name ");
        assert_eq!(asset.description, "multi\nline");
    }

    // --- Properties ---

    fn headers_strategy() -> impl Strategy<Value = Option<Vec<String>>> {
        proptest::option::of(proptest::collection::vec("[a-zA-Z_][a-zA-Z0-9_ ]{0,12}", 0..16))
    }

    proptest! {
        #[test]
        fn schema_present_iff_headers_supplied(
            path in "/[a-z0-9/]{1,24}\\.csv",
            headers in headers_strategy(),
        ) {
            let mut req = OnboardingRequest::new(path, "n", "d");
            req.column_headers = headers.clone();
            let graph = build(&req);

            match headers {
                None => prop_assert!(graph.schema.is_none()),
                Some(h) => {
                    let schema = graph.schema.unwrap();
                    prop_assert_eq!(schema.attributes.len(), h.len());
                    let names: Vec<String> = schema.attributes.iter().map(|a| a.name.clone()).collect();
                    prop_assert_eq!(names, h);
                }
            }
        }

        #[test]
        fn separators_are_caller_value_or_default(
            delimiter in proptest::option::of(any::<char>()),
            quote in proptest::option::of(any::<char>()),
        ) {
            let mut req = OnboardingRequest::new("/f.csv", "f", "");
            req.delimiter = delimiter;
            req.quote = quote;
            let graph = build(&req);

            let expected_delimiter = delimiter.unwrap_or(DEFAULT_DELIMITER);
            let expected_quote = quote.unwrap_or(DEFAULT_QUOTE);
            prop_assert_eq!(graph.asset.delimiter(), Some(expected_delimiter));
            prop_assert_eq!(graph.asset.quote(), Some(expected_quote));
            prop_assert_eq!(
                graph.connection.configuration_property(DELIMITER_CONFIG_PROPERTY),
                Some(&PropertyValue::Char(expected_delimiter))
            );
            prop_assert_eq!(
                graph.connection.configuration_property(QUOTE_CONFIG_PROPERTY),
                Some(&PropertyValue::Char(expected_quote))
            );
        }

        #[test]
        fn qualified_name_depends_only_on_path(
            path in ".{0,40}",
            name_a in ".{0,20}",
            name_b in ".{0,20}",
            desc_a in ".{0,20}",
            desc_b in ".{0,20}",
        ) {
            let a = build(&OnboardingRequest::new(path.clone(), name_a, desc_a));
            let b = build(&OnboardingRequest::new(path.clone(), name_b, desc_b));
            prop_assert_eq!(&a.asset.qualified_name, &b.asset.qualified_name);
            prop_assert_eq!(a.asset.qualified_name, format!("CSVFile:{path}"));
            prop_assert_eq!(a.connection.qualified_name, b.connection.qualified_name);
        }

        #[test]
        fn column_names_key_present_iff_headers_supplied(headers in headers_strategy()) {
            let mut req = OnboardingRequest::new("/f.csv", "f", "");
            req.column_headers = headers.clone();
            let conn = build(&req).connection;

            prop_assert!(conn.configuration_properties.is_some());
            prop_assert!(conn.configuration_property(DELIMITER_CONFIG_PROPERTY).is_some());
            prop_assert!(conn.configuration_property(QUOTE_CONFIG_PROPERTY).is_some());
            prop_assert_eq!(
                conn.configuration_property(COLUMN_NAMES_CONFIG_PROPERTY).is_some(),
                headers.is_some()
            );
        }
    }
}
