//! HTTP client tests against mock servers
//!
//! Each client is pointed at a wiremock server and checked for:
//! - request shape (paths and query parameters)
//! - response mapping
//! - failures collapsing into empty results

use biosheet_ingest::kegg::KeggClient;
use biosheet_ingest::pubmed::PubMedClient;
use biosheet_ingest::reactome::ReactomeClient;
use biosheet_ingest::uniprot::UniProtClient;
use reqwest::Client;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn uniprot_search_response() -> serde_json::Value {
    serde_json::json!({
        "results": [{
            "primaryAccession": "P01308",
            "uniProtkbId": "INS_HUMAN",
            "organism": {"scientificName": "Homo sapiens"},
            "proteinDescription": {"recommendedName": {"fullName": {"value": "Insulin"}}},
            "genes": [{"geneName": {"value": "INS"}}],
            "comments": [
                {"commentType": "FUNCTION", "texts": [{"value": "Insulin decreases blood glucose concentration."}]}
            ]
        }]
    })
}

const EFETCH_XML: &str = r#"<?xml version="1.0" ?>
<PubmedArticleSet>
  <PubmedArticle>
    <MedlineCitation>
      <PMID Version="1">111</PMID>
      <Article>
        <Journal><Title>Diabetologia</Title><JournalIssue><PubDate><Year>2022</Year><Month>Mar</Month></PubDate></JournalIssue></Journal>
        <ArticleTitle>Insulin action.</ArticleTitle>
      </Article>
    </MedlineCitation>
  </PubmedArticle>
  <PubmedArticle>
    <MedlineCitation>
      <PMID Version="1">222</PMID>
      <Article><ArticleTitle>Insulin secretion.</ArticleTitle></Article>
    </MedlineCitation>
  </PubmedArticle>
</PubmedArticleSet>"#;

// ============================================================================
// UniProt
// ============================================================================

#[tokio::test]
async fn test_uniprot_search_sends_human_filter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/uniprotkb/search"))
        .and(query_param("query", "insulin AND organism_id:9606"))
        .and(query_param("format", "json"))
        .and(query_param("size", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(uniprot_search_response()))
        .expect(1)
        .mount(&server)
        .await;

    let client = UniProtClient::new(Client::new(), server.uri());
    let entries = client.lookup_by_keyword("insulin", Some("9606"), 10).await;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].accession, "P01308");
    assert_eq!(entries[0].gene_names, vec!["INS"]);
}

#[tokio::test]
async fn test_uniprot_server_error_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/uniprotkb/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = UniProtClient::new(Client::new(), server.uri());
    assert!(client.lookup_by_keyword("insulin", None, 5).await.is_empty());
}

#[tokio::test]
async fn test_uniprot_invalid_json_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/uniprotkb/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = UniProtClient::new(Client::new(), server.uri());
    assert!(client.lookup_by_keyword("insulin", None, 5).await.is_empty());
}

#[tokio::test]
async fn test_uniprot_lookup_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/uniprotkb/P01308"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "primaryAccession": "P01308",
            "uniProtkbId": "INS_HUMAN"
        })))
        .mount(&server)
        .await;

    let client = UniProtClient::new(Client::new(), server.uri());

    let entry = client.lookup_by_id("P01308").await.expect("entry");
    assert_eq!(entry.entry_name, "INS_HUMAN");
    assert!(client.lookup_by_id("Q99999").await.is_none());
}

// ============================================================================
// PubMed
// ============================================================================

#[tokio::test]
async fn test_pubmed_search_then_fetch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("db", "pubmed"))
        .and(query_param("term", "insulin hormone"))
        .and(query_param("retmax", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "esearchresult": {"idlist": ["111", "222"]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .and(query_param("id", "111,222"))
        .and(query_param("retmode", "xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(EFETCH_XML))
        .expect(1)
        .mount(&server)
        .await;

    let client = PubMedClient::new(Client::new(), server.uri(), None);
    let publications = client.lookup_by_keyword("insulin hormone", 5).await;

    let pmids: Vec<&str> = publications.iter().map(|p| p.pmid.as_str()).collect();
    assert_eq!(pmids, vec!["111", "222"]);
    assert_eq!(publications[0].publication_date, "Mar 2022");
    assert_eq!(publications[0].journal, "Diabetologia");
}

#[tokio::test]
async fn test_pubmed_no_ids_skips_fetch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "esearchresult": {"idlist": []}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(EFETCH_XML))
        .expect(0)
        .mount(&server)
        .await;

    let client = PubMedClient::new(Client::new(), server.uri(), None);
    assert!(client.lookup_by_keyword("nothing here", 5).await.is_empty());
}

#[tokio::test]
async fn test_pubmed_sends_api_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .and(query_param("api_key", "secret-key"))
        .and(query_param("id", "111"))
        .respond_with(ResponseTemplate::new(200).set_body_string(EFETCH_XML))
        .expect(1)
        .mount(&server)
        .await;

    let client = PubMedClient::new(Client::new(), server.uri(), Some("secret-key".into()));
    let publication = client.lookup_by_id("111").await.expect("publication");
    assert_eq!(publication.title, "Insulin action.");
}

// ============================================================================
// Reactome
// ============================================================================

#[tokio::test]
async fn test_reactome_search_by_name() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/query"))
        .and(query_param("query", "insulin"))
        .and(query_param("species", "Homo sapiens"))
        .and(query_param("types", "Pathway"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{
                "typeName": "Pathway",
                "entries": [
                    {"stId": "R-HSA-74749", "name": "Signal attenuation", "species": ["Homo sapiens"]},
                    {"stId": "R-HSA-422356", "name": "Regulation of <span class=\"highlighting\" >insulin</span> secretion", "species": ["Homo sapiens"]}
                ]
            }]
        })))
        .mount(&server)
        .await;

    let client = ReactomeClient::new(Client::new(), server.uri());
    let pathways = client.search_by_name("insulin").await;

    assert_eq!(pathways.len(), 2);
    assert_eq!(pathways[0].st_id, "R-HSA-74749");
    assert_eq!(pathways[1].name, "Regulation of insulin secretion");
}

#[tokio::test]
async fn test_reactome_search_not_found_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/query"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "code": 404, "reason": "Not Found", "messages": ["No entries found for query: 'xyz'"]
        })))
        .mount(&server)
        .await;

    let client = ReactomeClient::new(Client::new(), server.uri());
    assert!(client.search_by_name("xyz").await.is_empty());
}

#[tokio::test]
async fn test_reactome_pathways_for_entity() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/mapping/UniProt/P01308/pathways"))
        .and(query_param("species", "9606"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"stId": "R-HSA-264876", "displayName": "Insulin processing", "speciesName": "Homo sapiens"}
        ])))
        .mount(&server)
        .await;

    let client = ReactomeClient::new(Client::new(), server.uri());
    let pathways = client.pathways_for_entity("P01308").await;

    assert_eq!(pathways.len(), 1);
    assert_eq!(pathways[0].name, "Insulin processing");
    assert!(client.pathways_for_entity("Q99999").await.is_empty());
}

#[tokio::test]
async fn test_reactome_entity_pathways_request_uses_uniprot_mapping() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = ReactomeClient::new(Client::new(), server.uri());
    assert!(client.pathways_for_entity(" P01308 ").await.is_empty());

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/data/mapping/UniProt/P01308/pathways");
    assert_eq!(requests[0].url.query(), Some("species=9606"));
}

#[tokio::test]
async fn test_reactome_lookup_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/query/R-HSA-74749"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "stId": "R-HSA-74749", "displayName": "Signal attenuation", "speciesName": "Homo sapiens"
        })))
        .mount(&server)
        .await;

    let client = ReactomeClient::new(Client::new(), server.uri());
    let pathway = client.lookup_by_id("R-HSA-74749").await.expect("pathway");

    assert_eq!(pathway.name, "Signal attenuation");
    assert!(client.lookup_by_id("R-HSA-0").await.is_none());
}

// ============================================================================
// KEGG
// ============================================================================

#[tokio::test]
async fn test_kegg_compound_lookup() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/get/C00041"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "ENTRY       C00041                      Compound\n\
             NAME        L-Alanine;\n\
             \x20           Alanine\n\
             ENZYME      1.4.1.1         2.6.1.2\n\
             ///\n",
        ))
        .mount(&server)
        .await;

    let client = KeggClient::new(Client::new(), server.uri());
    let compound = client.lookup_by_id("C00041").await.expect("compound");

    assert_eq!(compound.id, "C00041");
    assert_eq!(compound.names, vec!["L-Alanine", "Alanine"]);
    assert_eq!(compound.enzymes, vec!["1.4.1.1", "2.6.1.2"]);
    assert!(client.lookup_by_id("C99999").await.is_none());
}

#[tokio::test]
async fn test_kegg_find_compounds() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/find/compound/alanine"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("cpd:C00041\tL-Alanine; Alanine\ncpd:C00133\tD-Alanine\n"),
        )
        .mount(&server)
        .await;

    let client = KeggClient::new(Client::new(), server.uri());
    let hits = client.lookup_by_keyword("alanine").await;

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[1].id, "C00133");
}
