/*!
 * Markdown documents with YAML front matter.
 *
 * - `model`: decoded documents and the header written back to disk
 * - `codec`: front matter splitting and the fixed output layout
 */

pub use self::codec::{encode, split_front_matter};
pub use self::model::{Document, Header};

pub mod codec;
pub mod model;
