//! Namespace and term IRIs of the AMF vocabularies read by the engine.
//!
//! All constants are full (expanded) IRIs. Compact documents are handled by
//! [`AmfGraph::amf_key`](crate::graph::AmfGraph::amf_key), which rewrites an IRI
//! into the `prefix:term` form declared by the document's `@context`.

macro_rules! vocabulary {
    ($(#[$meta:meta])* $module:ident = $ns:literal { $( $name:ident => $term:literal ),* $(,)? }) => {
        $(#[$meta])*
        pub mod $module {
            /// The namespace IRI, ending with its separator.
            pub const NS: &str = $ns;
            $( pub const $name: &str = concat!($ns, $term); )*
        }
    };
}

vocabulary! {
    /// W3C SHACL terms.
    shacl = "http://www.w3.org/ns/shacl#" {
        NODE_SHAPE => "NodeShape",
        PROPERTY_SHAPE => "PropertyShape",
        PROPERTY => "property",
        NAME => "name",
        MIN_COUNT => "minCount",
        DATATYPE => "datatype",
        IN => "in",
        DEFAULT_VALUE => "defaultValue",
        DEFAULT_VALUE_STR => "defaultValueStr",
        PATTERN => "pattern",
        MIN_LENGTH => "minLength",
        MAX_LENGTH => "maxLength",
        MIN_INCLUSIVE => "minInclusive",
        MAX_INCLUSIVE => "maxInclusive",
    }
}

vocabulary! {
    /// AML shapes vocabulary.
    shapes = "http://a.ml/vocabularies/shapes#" {
        SCALAR_SHAPE => "ScalarShape",
        ARRAY_SHAPE => "ArrayShape",
        MATRIX_SHAPE => "MatrixShape",
        TUPLE_SHAPE => "TupleShape",
        UNION_SHAPE => "UnionShape",
        FILE_SHAPE => "FileShape",
        NIL_SHAPE => "NilShape",
        RANGE => "range",
        SCHEMA => "schema",
        ITEMS => "items",
        ANY_OF => "anyOf",
        FORMAT => "format",
        MULTIPLE_OF => "multipleOf",
        FILE_TYPE => "fileType",
        NUMBER => "number",
        DATE_TIME_ONLY => "dateTimeOnly",
        PASSWORD => "password",
    }
}

vocabulary! {
    /// Data vocabulary used by raw annotation and example values.
    data = "http://a.ml/vocabularies/data#" {
        OBJECT => "Object",
        SCALAR => "Scalar",
        ARRAY => "Array",
        VALUE => "value",
        TYPE => "type",
        REQUIRED => "required",
        DISPLAY_NAME => "displayName",
        DESCRIPTION => "description",
        MIN_LENGTH => "minLength",
        MAX_LENGTH => "maxLength",
        DEFAULT => "default",
        MULTIPLE_OF => "multipleOf",
        MINIMUM => "minimum",
        MAXIMUM => "maximum",
        ENUM => "enum",
        PATTERN => "pattern",
        ITEMS => "items",
        FORMAT => "format",
        EXAMPLE => "example",
        EXAMPLES => "examples",
    }
}

vocabulary! {
    /// AML document vocabulary.
    document = "http://a.ml/vocabularies/document#" {
        CUSTOM_DOMAIN_PROPERTIES => "customDomainProperties",
        LINK_TARGET => "link-target",
        RAW => "raw",
        STRUCTURED_VALUE => "structuredValue",
    }
}

vocabulary! {
    /// AML API contract vocabulary.
    api_contract = "http://a.ml/vocabularies/apiContract#" {
        PARAMETER => "Parameter",
        PARAM_NAME => "paramName",
        BINDING => "binding",
        REQUIRED => "required",
        EXAMPLES => "examples",
        STRUCTURED_VALUE => "structuredValue",
    }
}

vocabulary! {
    /// AML core vocabulary.
    core = "http://a.ml/vocabularies/core#" {
        NAME => "name",
        DESCRIPTION => "description",
        EXTENSION_NAME => "extensionName",
        MEDIA_TYPE => "mediaType",
    }
}

vocabulary! {
    /// XML schema datatypes.
    xsd = "http://www.w3.org/2001/XMLSchema#" {
        STRING => "string",
        INTEGER => "integer",
        LONG => "long",
        FLOAT => "float",
        DOUBLE => "double",
        NUMBER => "number",
        BOOLEAN => "boolean",
        DATE_TIME => "dateTime",
        TIME => "time",
        DATE => "date",
        BASE64_BINARY => "base64Binary",
    }
}

vocabulary! {
    /// RDF schema terms. Ordered members (`rdfs:_1`, `rdfs:_2`, ...) share this namespace.
    rdfs = "http://www.w3.org/2000/01/rdf-schema#" {
        MEMBER => "member",
    }
}
