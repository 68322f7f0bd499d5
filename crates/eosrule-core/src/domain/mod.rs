//! # Domain Types
//!
//! Identifier wrappers a host may pass to the rules instead of plain strings.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`NamedIdentifier`] | Account, action, permission, table or plain name |
//! | [`SymbolCode`] | 1 to 7 letter asset ticker |
//! | [`Symbol`] | Precision plus ticker, e.g. `4,EOS` |
//! | [`FieldValue`] | Closed set of values a rule can be handed |

mod name;
mod symbol;
mod value;

pub use name::{NameKind, NamedIdentifier};
pub use symbol::{Symbol, SymbolCode};
pub use value::{FieldValue, NameMode};
