//! Dart type names for inferred field types

use crate::schema::InferredType;

/// Dart type used for a field of the given inferred type
pub fn dart_type(ty: &InferredType) -> String {
    match ty {
        InferredType::Boolean => "bool".to_string(),
        InferredType::Integer => "int".to_string(),
        InferredType::Float => "double".to_string(),
        InferredType::String => "String".to_string(),
        InferredType::Null => "dynamic".to_string(),
        InferredType::List(Some(element)) => format!("List<{}>", dart_type(element)),
        InferredType::List(None) => "List<dynamic>".to_string(),
        InferredType::Map => "Map<String, dynamic>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_types() {
        assert_eq!(dart_type(&InferredType::Boolean), "bool");
        assert_eq!(dart_type(&InferredType::Integer), "int");
        assert_eq!(dart_type(&InferredType::Float), "double");
        assert_eq!(dart_type(&InferredType::String), "String");
        assert_eq!(dart_type(&InferredType::Null), "dynamic");
        assert_eq!(dart_type(&InferredType::Map), "Map<String, dynamic>");
    }

    #[test]
    fn test_list_types() {
        assert_eq!(dart_type(&InferredType::List(None)), "List<dynamic>");
        assert_eq!(
            dart_type(&InferredType::list_of(InferredType::list_of(InferredType::Map))),
            "List<List<Map<String, dynamic>>>"
        );
    }
}
