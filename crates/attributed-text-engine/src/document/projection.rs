use super::rich::RichDocument;

/// Reconstructs canonical text: plain runs verbatim, chips replaced by their
/// recorded canonical content.
///
/// For a document loaded from `s` where every token resolved,
/// `project(&doc) == s`. Tokens that failed to resolve were never turned into
/// chips, so they are carried through as plain text.
pub fn project(doc: &RichDocument) -> String {
    let mut out = String::new();
    for node in doc.nodes() {
        node.project_into(&mut out);
    }
    out
}
