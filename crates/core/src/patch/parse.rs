use super::{PatchBodyError, PatchOperation};

/// Parse a request body into a non-empty list of patch operations.
pub fn parse_patches(body: &[u8]) -> Result<Vec<PatchOperation>, PatchBodyError> {
    if body.is_empty() {
        return Err(PatchBodyError::EmptyBody);
    }

    let patches: Vec<PatchOperation> =
        serde_json::from_slice(body).map_err(PatchBodyError::Malformed)?;

    if patches.is_empty() {
        return Err(PatchBodyError::NoPatches);
    }

    Ok(patches)
}
