use crate::{Document, EditError};

/// The editor's view of the open save: the current snapshot and whether it differs from
/// what was loaded or last saved.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditorState {
    pub document: Option<Document>,
    pub is_modified: bool,
}

/// What a guarded edit did.
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    Applied,
    /// The modifier failed validation; the state was left as it was.
    Rejected(EditError),
    /// No save is open.
    NoDocument,
}

impl EditorState {
    /// Fresh state for a just-loaded document.
    pub fn load(document: Document) -> Self {
        Self {
            document: Some(document),
            is_modified: false,
        }
    }

    /// Clear the modified flag after the host has persisted the current snapshot.
    pub fn mark_saved(&mut self) {
        self.is_modified = false;
    }

    /// Run `modifier` against the current document and commit its result.
    ///
    /// Validation failures (an `EditError` at the root of the error chain) leave the state
    /// untouched and are reported as [`EditOutcome::Rejected`]. Any other error from the
    /// modifier is returned as-is.
    pub fn apply<F>(self, modifier: F) -> anyhow::Result<(Self, EditOutcome)>
    where
        F: FnOnce(&Document) -> anyhow::Result<Document>,
    {
        let result = match self.document.as_ref().map(modifier) {
            Some(result) => result,
            None => return Ok((self, EditOutcome::NoDocument)),
        };

        match result {
            Ok(document) => {
                log::trace!("committed edit ({} game objects)", document.record_count());
                let state = Self {
                    document: Some(document),
                    is_modified: true,
                };
                Ok((state, EditOutcome::Applied))
            }
            // Only an error that originates as an EditError is a rejection. A fault that merely
            // carries an EditError as context still propagates.
            Err(err) => match err.root_cause().downcast_ref::<EditError>() {
                Some(rejected) => {
                    let rejected = rejected.clone();
                    log::debug!("edit rejected: {err:#}");
                    Ok((self, EditOutcome::Rejected(rejected)))
                }
                None => Err(err),
            },
        }
    }

    /// Like [`EditorState::apply`], but a rejected edit is indistinguishable from no edit.
    pub fn try_apply<F>(self, modifier: F) -> anyhow::Result<Self>
    where
        F: FnOnce(&Document) -> anyhow::Result<Document>,
    {
        let (state, _) = self.apply(modifier)?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::{EditOutcome, EditorState};
    use crate::{Document, EditError, Group, Record};
    use anyhow::Context;

    fn state() -> EditorState {
        EditorState::load(Document::new(vec![Group::new("Minion", vec![Record::default()])]))
    }

    #[test]
    fn no_document_is_noop() {
        let (out, outcome) = EditorState::default()
            .apply(|_| panic!("modifier must not run"))
            .unwrap();
        assert_eq!(out, EditorState::default());
        assert_eq!(outcome, EditOutcome::NoDocument);
    }

    #[test]
    fn success_installs_document_and_sets_modified() {
        let out = state()
            .try_apply(|doc| Ok(Document::new(doc.groups[..0].to_vec())))
            .unwrap();
        assert!(out.is_modified);
        assert_eq!(out.document, Some(Document::default()));
    }

    #[test]
    fn validation_failure_keeps_state() {
        let before = state();
        let (out, outcome) = before
            .clone()
            .apply(|_| Err(EditError::NotFound { id: 3 }.into()))
            .unwrap();
        assert_eq!(out, before);
        assert_eq!(outcome, EditOutcome::Rejected(EditError::NotFound { id: 3 }));
    }

    #[test]
    fn validation_failure_survives_added_context() {
        // Context wrapping keeps the EditError downcastable.
        let before = state();
        let out = before
            .clone()
            .try_apply(|_| Err(EditError::MissingIdentity).context("replacing duplicant"))
            .unwrap();
        assert_eq!(out, before);
    }

    #[test]
    fn fault_with_edit_error_context_propagates() {
        let err = state()
            .try_apply(|_| Err(anyhow::anyhow!("io fault")).context(EditError::MissingIdentity))
            .unwrap_err();
        assert_eq!(err.root_cause().to_string(), "io fault");
        assert_eq!(err.to_string(), EditError::MissingIdentity.to_string());
    }

    #[test]
    fn other_failures_propagate() {
        let err = state()
            .try_apply(|_| Err(anyhow::anyhow!("disk on fire")))
            .unwrap_err();
        assert_eq!(err.to_string(), "disk on fire");
    }

    #[test]
    fn mark_saved_clears_flag() {
        let mut out = state().try_apply(|doc| Ok(doc.clone())).unwrap();
        assert!(out.is_modified);
        out.mark_saved();
        assert!(!out.is_modified);
    }
}
