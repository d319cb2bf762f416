/*!
 * Vocabulary-driven rewriting of documents.
 *
 * - `table`: ordered literal substitution tables
 * - `vocabulary`: built-in body and title tables per target locale
 */

pub use self::table::SubstitutionTable;
pub use self::vocabulary::Vocabulary;

pub mod table;
pub mod vocabulary;

use crate::document::{self, Document, Header};
use crate::errors::DocumentError;

/// Rewrite the title and body of `document` and encode the result.
///
/// Front matter keys other than `title`, `slug` and `l10n.sourceCommit`
/// are not carried over.
pub fn translate_document(document: &Document, vocabulary: &Vocabulary) -> Result<String, DocumentError> {
    let header = document.header()?;
    let translated = Header {
        title: vocabulary.translate_title(&header.title),
        ..header
    };
    let body = vocabulary.translate_body(&document.body);

    Ok(document::encode(&translated, &body))
}
