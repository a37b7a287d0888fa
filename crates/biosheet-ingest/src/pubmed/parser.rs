//! PubMed efetch XML parser
//!
//! Walks `PubmedArticleSet` documents with the quick-xml pull reader. Titles
//! and abstracts may carry inline markup (`<i>`, `<sup>`), so text is
//! accumulated for the whole capture element instead of per text node.

use super::Publication;
use crate::error::{IngestError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;

const SERVICE: &str = "pubmed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Pmid,
    Title,
    Abstract,
    LastName,
    ForeName,
    Journal,
    Year,
    Month,
    Keyword,
    Mesh,
}

/// Which field an element feeds, given its parent element
fn slot_for(parent: Option<&str>, name: &str) -> Option<Slot> {
    match (parent?, name) {
        ("MedlineCitation", "PMID") => Some(Slot::Pmid),
        ("Article", "ArticleTitle") => Some(Slot::Title),
        ("Abstract", "AbstractText") => Some(Slot::Abstract),
        ("Author", "LastName") => Some(Slot::LastName),
        ("Author", "ForeName") => Some(Slot::ForeName),
        ("Journal", "Title") => Some(Slot::Journal),
        ("PubDate", "Year") => Some(Slot::Year),
        ("PubDate", "Month") => Some(Slot::Month),
        ("KeywordList", "Keyword") => Some(Slot::Keyword),
        ("MeshHeading", "DescriptorName") => Some(Slot::Mesh),
        _ => None,
    }
}

fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Default)]
struct ArticleState {
    publication: Publication,
    last_name: Option<String>,
    fore_name: Option<String>,
    year: Option<String>,
    month: Option<String>,
}

impl ArticleState {
    fn store(&mut self, slot: Slot, text: String) {
        if text.is_empty() {
            return;
        }
        let publication = &mut self.publication;
        match slot {
            Slot::Pmid if publication.pmid.is_empty() => publication.pmid = text,
            Slot::Pmid => {},
            Slot::Title => publication.title = text,
            Slot::Abstract => {
                if !publication.abstract_text.is_empty() {
                    publication.abstract_text.push(' ');
                }
                publication.abstract_text.push_str(&text);
            },
            Slot::LastName => self.last_name = Some(text),
            Slot::ForeName => self.fore_name = Some(text),
            Slot::Journal => publication.journal = text,
            Slot::Year => self.year = Some(text),
            Slot::Month => self.month = Some(text),
            Slot::Keyword => publication.keywords.push(text),
            Slot::Mesh => publication.mesh_terms.push(text),
        }
    }

    fn close_author(&mut self) {
        if let (Some(fore), Some(last)) = (self.fore_name.take(), self.last_name.take()) {
            self.publication.authors.push(format!("{} {}", fore, last));
        }
        self.fore_name = None;
        self.last_name = None;
    }

    fn finish(mut self) -> Publication {
        self.publication.publication_date = match (self.month, self.year) {
            (Some(month), Some(year)) => format!("{} {}", month, year),
            (None, Some(year)) => year,
            _ => String::new(),
        };
        self.publication
    }
}

/// Parse an efetch response into publications, in document order.
///
/// Articles without a PMID are dropped.
pub fn parse_article_set(xml: &str) -> Result<Vec<Publication>> {
    let mut reader = Reader::from_str(xml);

    let mut path: Vec<String> = Vec::new();
    let mut article: Option<ArticleState> = None;
    let mut capture: Option<(Slot, usize, String)> = None;
    let mut publications = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();

                if name == "PubmedArticle" {
                    article = Some(ArticleState::default());
                } else if let Some(state) = article.as_mut() {
                    if name == "Author" {
                        state.fore_name = None;
                        state.last_name = None;
                    }
                    if capture.is_none() {
                        if let Some(slot) = slot_for(path.last().map(String::as_str), &name) {
                            capture = Some((slot, path.len(), String::new()));
                        }
                    }
                }

                path.push(name);
            },
            Event::End(_) => {
                let name = path.pop().unwrap_or_default();

                if let Some((slot, depth, _)) = capture.as_ref() {
                    if *depth == path.len() {
                        let (slot, text) = (*slot, capture.take().map(|c| c.2).unwrap_or_default());
                        if let Some(state) = article.as_mut() {
                            state.store(slot, normalize(&text));
                        }
                    }
                }

                match name.as_str() {
                    "Author" => {
                        if let Some(state) = article.as_mut() {
                            state.close_author();
                        }
                    },
                    "PubmedArticle" => {
                        if let Some(state) = article.take() {
                            let publication = state.finish();
                            if !publication.pmid.is_empty() {
                                publications.push(publication);
                            }
                        }
                    },
                    _ => {},
                }
            },
            Event::Text(text) => {
                if let Some((_, _, buffer)) = capture.as_mut() {
                    let text = text
                        .unescape()
                        .map_err(|e| IngestError::malformed(SERVICE, e.to_string()))?;
                    buffer.push_str(&text);
                }
            },
            Event::CData(data) => {
                if let Some((_, _, buffer)) = capture.as_mut() {
                    buffer.push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            },
            Event::Eof => break,
            _ => {},
        }
    }

    Ok(publications)
}
