//! Declaration macros for typed HQDM entities.
//!
//! One `hqdm_entity!` block is the single source for a type: its rule table,
//! its typed wrapper, and its builder with one setter per relationship.
//!
//! ```text
//! hqdm_entity! {
//!     /// docs
//!     Activity, ActivityBuilder {
//!         causes_m => Causes: mandatory,
//!         entity_name => DataEntityName: optional [literal],
//!     }
//! }
//! ```
//!
//! The table is declared in the order rules are checked.

macro_rules! hqdm_setter {
    ($setter:ident, $key:ident) => {
        pub fn $setter(mut self, target: &impl $crate::model::Identified) -> Self {
            self.entity.add_value(
                $crate::vocab::RelationshipKey::$key,
                $crate::model::Value::reference(target),
            );
            self
        }
    };
    ($setter:ident, $key:ident, literal) => {
        pub fn $setter(mut self, literal: impl Into<String>) -> Self {
            self.entity.add_value(
                $crate::vocab::RelationshipKey::$key,
                $crate::model::Value::Literal(literal.into()),
            );
            self
        }
    };
}

macro_rules! hqdm_entity {
    (
        $(#[$meta:meta])*
        $name:ident, $builder:ident {
            $( $setter:ident => $key:ident : $card:ident $([$lit:ident])? ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "Entity", into = "Entity")]
        pub struct $name(Entity);

        impl $name {
            pub const ENTITY_TYPE: EntityType = EntityType::$name;

            /// Rule table, in check order.
            pub const RULES: &'static [Rule] = &[
                $( Rule::$card(RelationshipKey::$key), )*
            ];

            pub fn builder(iri: impl Into<Iri>) -> $builder {
                $builder::new(iri)
            }

            pub fn into_entity(self) -> Entity {
                self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = Entity;

            fn deref(&self) -> &Entity {
                &self.0
            }
        }

        impl AsRef<Entity> for $name {
            fn as_ref(&self) -> &Entity {
                &self.0
            }
        }

        impl Identified for $name {
            fn iri(&self) -> &Iri {
                self.0.id()
            }
        }

        impl From<$name> for Entity {
            fn from(typed: $name) -> Entity {
                typed.0
            }
        }

        impl From<&$name> for Value {
            fn from(typed: &$name) -> Value {
                Value::reference(typed)
            }
        }

        /// Re-checks the type tag and the rule table.
        impl TryFrom<Entity> for $name {
            type Error = Error;

            fn try_from(entity: Entity) -> Result<Self> {
                if entity.entity_type() != Self::ENTITY_TYPE {
                    return Err(Error::TypeMismatch {
                        expected: Self::ENTITY_TYPE,
                        got: entity.entity_type(),
                    });
                }
                validate(&entity, Self::RULES)?;
                Ok(Self(entity))
            }
        }

        #[doc = concat!("Builder for [`", stringify!($name), "`].")]
        #[derive(Debug, Clone)]
        #[must_use]
        pub struct $builder {
            entity: Entity,
        }

        impl $builder {
            pub fn new(iri: impl Into<Iri>) -> Self {
                Self { entity: Entity::new(iri, EntityType::$name) }
            }

            $( hqdm_setter!($setter, $key $(, $lit)?); )*

            /// Validate and finish. Consumes the builder; on failure start over
            /// with a fresh one.
            pub fn build(self) -> std::result::Result<$name, ValidationError> {
                validate(&self.entity, $name::RULES)?;
                Ok($name(self.entity))
            }
        }
    };
}
