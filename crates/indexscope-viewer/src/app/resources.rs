use bevy::prelude::Resource;
use crossbeam_channel::Receiver;

/// Entity names queued by ranking-row hovers.
#[derive(Resource)]
pub struct HighlightRx(pub Receiver<String>);
