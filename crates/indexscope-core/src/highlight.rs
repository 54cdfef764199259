/// One-way signal asking the trend view to emphasize an entity's line.
///
/// Fire-and-forget: no acknowledgement, and unknown names must be ignored by the sink.
pub trait CrossViewHighlighter {
    fn highlight(&self, entity_name: &str);
}

impl<F> CrossViewHighlighter for F
where
    F: Fn(&str),
{
    fn highlight(&self, entity_name: &str) {
        self(entity_name)
    }
}
