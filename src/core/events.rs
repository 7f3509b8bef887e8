use bevy::prelude::*;

/// 面向终端的一行文字输出，main 里统一打印
#[derive(Event)]
pub struct LogEvent(pub String);
