/// Implements sqlx decoding for an enum stored in a TEXT column through its `FromStr`.
/// Values are bound with `as_str()`, so no `Encode` impl is needed.
macro_rules! text_column {
    ($ty:ty) => {
        impl sqlx::Type<sqlx::Postgres> for $ty {
            fn type_info() -> sqlx::postgres::PgTypeInfo {
                <String as sqlx::Type<sqlx::Postgres>>::type_info()
            }

            fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
                <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
            }
        }

        impl<'r> sqlx::Decode<'r, sqlx::Postgres> for $ty {
            fn decode(
                value: sqlx::postgres::PgValueRef<'r>,
            ) -> Result<Self, sqlx::error::BoxDynError> {
                let raw = <&str as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
                Ok(raw.parse::<$ty>()?)
            }
        }
    };
}
pub(crate) use text_column;

pub mod donation;
pub mod ngo;
pub mod pickup;
pub mod schedule;
pub mod stats;
pub mod user;

pub use donation::*;
pub use ngo::*;
pub use pickup::*;
pub use schedule::*;
pub use stats::*;
pub use user::*;
