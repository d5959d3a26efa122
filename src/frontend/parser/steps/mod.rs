//! Reusable parse steps
//!
//! Steps are small configurable structs. Language profiles pick and order
//! them; nothing in here knows which language it is running for.

mod cleanup;
mod combine;
mod functions;
mod objects;
mod selection;
mod types;

pub use cleanup::{RemoveDuplicates, RemoveKinds};
pub use combine::{CombineBrackets, CombineChains, CombineKeywords, CombineNumbers};
pub use functions::{LambdaStyle, RemoveDeclarationAssignee, RemoveFunctionCalls, RemoveLambdas};
pub use objects::{RemoveKeywordArguments, RemoveObjectKeys};
pub use selection::{CollectItems, SelectLogId};
pub use types::{RemoveCasts, RemoveGenerics, RemoveReturnTypes, RemoveTypeAnnotations, RemoveTypePrefixes};

use std::ops::Range;

use crate::frontend::lexer::{Token, TokenKind};
use crate::frontend::shared::{serialize_all, DEFAULT_QUOTE};

/// Replace `range` with a single token of `kind` spelling the same text.
pub(crate) fn merge(
    tokens: &mut Vec<Token>,
    range: Range<usize>,
    kind: TokenKind,
) {
    let value = serialize_all(&tokens[range.clone()], DEFAULT_QUOTE);
    tokens.splice(range, std::iter::once(Token::new(kind, value)));
}
