//! SEC filings and their footnotes.

use crate::query::{FilingNoteQuery, FilingNotesQuery, FilingsQuery};
use crate::types::{ApiResponseFilingNotes, ApiResponseFilings, Filing, FilingNote};
use crate::{Client, Endpoint};

pub const GET_ALL_FILINGS: Endpoint =
    Endpoint::get("get_all_filings", "/filings").requires(&["company"]);
pub const GET_FILING_BY_ID: Endpoint = Endpoint::get("get_filing_by_id", "/filings/{id}");
pub const GET_ALL_NOTES: Endpoint =
    Endpoint::get("get_all_notes", "/filings/notes").requires(&["company"]);
pub const GET_NOTE: Endpoint = Endpoint::get("get_note", "/filings/notes/{identifier}");
pub const GET_NOTE_TEXT: Endpoint =
    Endpoint::get("get_note_text", "/filings/notes/{identifier}/text").text();

/// Filing endpoints. Obtained from [`Client::filing`].
#[derive(Debug, Clone, Copy)]
pub struct FilingApi<'a> {
    client: &'a Client,
}

impl Client {
    pub fn filing(&self) -> FilingApi<'_> {
        FilingApi { client: self }
    }
}

api_methods! {
    FilingApi {
        /// Lists filings for a company. The query's `company` must be set.
        json fn get_all_filings / get_all_filings_with_info () [FilingsQuery]
            -> ApiResponseFilings = GET_ALL_FILINGS;
        json fn get_filing_by_id / get_filing_by_id_with_info (id)
            -> Filing = GET_FILING_BY_ID;
        /// Lists filing footnotes for a company. The query's `company` must be set.
        json fn get_all_notes / get_all_notes_with_info () [FilingNotesQuery]
            -> ApiResponseFilingNotes = GET_ALL_NOTES;
        json fn get_note / get_note_with_info (identifier) [FilingNoteQuery]
            -> FilingNote = GET_NOTE;
        /// Raw text content of a footnote.
        text fn get_note_text / get_note_text_with_info (identifier)
            -> String = GET_NOTE_TEXT;
    }
}
