use bevy::prelude::*;

/// 请求弹一条通知。随时可发，会顶掉在播的那条
#[derive(Event, Debug, Clone)]
pub struct ShowPopup(pub String);
