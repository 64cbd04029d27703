//! Deferred CloudFormation values
//
// Parameter "values" are not literals at synthesis time. They are
// placeholders that CloudFormation fills in when the stack is
// instantiated. `Token` keeps that distinction in the type system:
// anything carrying a `Token` cannot be mistaken for a resolved literal.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A value resolved by CloudFormation at stack-instantiation time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// The runtime value of a parameter: `{"Ref": "LogicalId"}`
    Ref(String),
    /// One element of a deferred list: `{"Fn::Select": [index, list]}`
    Select(u32, Box<Token>),
}

impl Token {
    /// Token for the runtime value of the parameter named `logical_id`
    pub fn reference(logical_id: impl Into<String>) -> Self {
        Token::Ref(logical_id.into())
    }

    /// Token for element `index` of a deferred list value
    pub fn select(index: u32, list: Token) -> Self {
        Token::Select(index, Box::new(list))
    }
}

impl Serialize for Token {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Token::Ref(id) => map.serialize_entry("Ref", id)?,
            Token::Select(index, list) => {
                map.serialize_entry("Fn::Select", &(index, list.as_ref()))?;
            }
        }
        map.end()
    }
}
