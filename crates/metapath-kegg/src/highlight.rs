//! Presentation sink: KEGG pathway-map overlay URLs.
//!
//! Given a map id, the ordered reaction ids of a chain and the seed
//! compound, KEGG's `show_pathway` endpoint renders the map with those
//! reactions highlighted and the seed tinted red. The engine supplies only
//! the ordered id list; all display logic stays on KEGG's side.

use metapath_core::ReactionId;

const SHOW_PATHWAY: &str = "https://www.kegg.jp/kegg-bin/show_pathway";

/// Overlay URL for a chain of reactions on a pathway map.
///
/// `%20%23ff0000` is the url-encoded ` #ff0000` color tag KEGG expects after
/// the highlighted compound.
pub fn highlight_url(map: &str, reactions: &[ReactionId], seed: &str) -> String {
    let chain = reactions.join("/");
    format!("{SHOW_PATHWAY}?{map}/{chain}/{seed}%20%23ff0000")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_lists_reactions_in_chain_order() {
        let url = highlight_url(
            "map00720",
            &["R00344".to_string(), "R00199".to_string()],
            "C00022",
        );
        assert_eq!(
            url,
            "https://www.kegg.jp/kegg-bin/show_pathway?map00720/R00344/R00199/C00022%20%23ff0000"
        );
    }

    #[test]
    fn empty_chain_still_produces_a_well_formed_url() {
        let url = highlight_url("map00720", &[], "C00022");
        assert_eq!(
            url,
            "https://www.kegg.jp/kegg-bin/show_pathway?map00720//C00022%20%23ff0000"
        );
    }
}
