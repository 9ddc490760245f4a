//! Google Sheets sharing-link handling.

use url::Url;

use super::LoadError;

const EXPORT_BASE_URL: &str = "https://docs.google.com/spreadsheets/d";

/// Convert a Google Sheets sharing URL into its CSV export URL.
///
/// The document id is the path segment after `d`, and the sheet `gid` is
/// taken from the query string or the fragment (`#gid=...`).
///
/// ```
/// use paper_finder::loader::csv_export_url;
///
/// let url = "https://docs.google.com/spreadsheets/d/abc123/edit?gid=42";
/// assert_eq!(
///     csv_export_url(url).unwrap(),
///     "https://docs.google.com/spreadsheets/d/abc123/export?format=csv&gid=42"
/// );
/// ```
pub fn csv_export_url(sharing_url: &str) -> Result<String, LoadError> {
    let invalid = || LoadError::InvalidSheetUrl(sharing_url.to_string());

    let parsed = Url::parse(sharing_url.trim()).map_err(|_| invalid())?;

    let file_id = parsed
        .path_segments()
        .and_then(|mut segments| {
            segments.by_ref().find(|s| *s == "d")?;
            segments.next()
        })
        .filter(|id| !id.is_empty())
        .ok_or_else(invalid)?;

    let gid = parsed
        .query_pairs()
        .find(|(k, _)| k == "gid")
        .map(|(_, v)| v.into_owned())
        .or_else(|| parsed.fragment().and_then(gid_from_fragment))
        .filter(|gid| !gid.is_empty())
        .ok_or_else(invalid)?;

    Ok(format!(
        "{}/{}/export?format=csv&gid={}",
        EXPORT_BASE_URL, file_id, gid
    ))
}

fn gid_from_fragment(fragment: &str) -> Option<String> {
    fragment
        .split('&')
        .find_map(|part| part.strip_prefix("gid="))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "17ru4XAU2NloE9Dfxr2PC1BVcsYkLLT5r7nPSsiOFlvQ";

    #[test]
    fn test_gid_in_query() {
        let url = format!("https://docs.google.com/spreadsheets/d/{DOC}/edit?gid=743838712");
        assert_eq!(
            csv_export_url(&url).unwrap(),
            format!("https://docs.google.com/spreadsheets/d/{DOC}/export?format=csv&gid=743838712")
        );
    }

    #[test]
    fn test_gid_in_fragment() {
        let url = format!("https://docs.google.com/spreadsheets/d/{DOC}/edit#gid=0");
        assert!(csv_export_url(&url).unwrap().ends_with("/export?format=csv&gid=0"));
    }

    #[test]
    fn test_gid_with_other_params() {
        let url = format!("https://docs.google.com/spreadsheets/d/{DOC}/edit?usp=sharing&gid=5#x");
        assert!(csv_export_url(&url).unwrap().ends_with("gid=5"));
    }

    #[test]
    fn test_missing_gid() {
        let url = format!("https://docs.google.com/spreadsheets/d/{DOC}/edit");
        assert!(matches!(
            csv_export_url(&url),
            Err(LoadError::InvalidSheetUrl(_))
        ));
    }

    #[test]
    fn test_missing_document_id() {
        assert!(csv_export_url("https://docs.google.com/spreadsheets/edit?gid=1").is_err());
        assert!(csv_export_url("https://docs.google.com/spreadsheets/d/").is_err());
    }

    #[test]
    fn test_not_a_url() {
        assert!(csv_export_url("not a url").is_err());
        assert!(csv_export_url("").is_err());
    }
}
