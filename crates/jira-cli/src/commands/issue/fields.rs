use anyhow::bail;
use jira_core::entities::RemoteFieldValue;

/// Parse repeated `id=value` flags into field values.
///
/// Repeating an id appends to that field's value list; the first
/// occurrence fixes the field's position.
pub fn parse_field_values(assignments: &[String]) -> anyhow::Result<Vec<RemoteFieldValue>> {
    let mut fields: Vec<(String, Vec<String>)> = Vec::new();
    for assignment in assignments {
        let Some((id, value)) = assignment.split_once('=') else {
            bail!("invalid field assignment `{assignment}`, expected `id=value`");
        };
        let id = id.trim();
        if id.is_empty() {
            bail!("invalid field assignment `{assignment}`, field id is empty");
        }
        match fields.iter_mut().find(|(existing, _)| existing == id) {
            Some((_, values)) => values.push(value.to_string()),
            None => fields.push((id.to_string(), vec![value.to_string()])),
        }
    }
    Ok(fields
        .into_iter()
        .map(|(id, values)| RemoteFieldValue::new(id, values))
        .collect())
}
