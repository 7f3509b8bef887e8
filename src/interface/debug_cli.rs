//! 文字 CLI：读取 stdin → 解析命令 → 执行并打印。
//! 游戏动作命令会注入成单帧输入边沿，走正常的帧循环

use bevy::app::AppExit;
use bevy::prelude::*;
use once_cell::sync::Lazy;
use std::collections::VecDeque;
use std::num::NonZero;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::character::components::{CharacterState, Player};
use crate::combat::components::ComboState;
use crate::core::{events::LogEvent, states::AppState, GameSet};
use crate::data::{schema::ItemList, ItemAssets};
use crate::input::events::InjectInput;
use crate::interface::components::{InteractionPrompt, Popup};
use crate::inventory::components::{Gear, Pickup};

static CLI_BUFFER: Lazy<Arc<Mutex<VecDeque<String>>>> =
    Lazy::new(|| Arc::new(Mutex::new(VecDeque::new())));

/// 插件入口
pub struct DebugCliPlugin;
impl Plugin for DebugCliPlugin {
    fn build(&self, app: &mut App) {
        {
            let buffer = CLI_BUFFER.clone();
            std::thread::spawn(move || {
                use std::io::{self, BufRead};
                let stdin = io::stdin();
                for line_result in stdin.lock().lines() {
                    if let Ok(line) = line_result {
                        let line = line.trim();
                        if !line.is_empty() {
                            let mut buf = buffer.lock().unwrap();
                            buf.push_back(line.to_string());
                        }
                    }
                }
            });
        }
        app
            // 事件：原始输入行
            .add_event::<CliLine>()
            // 每帧从 buffer 取出所有命令行写入事件
            .add_systems(Update, read_stdin)
            // 仅在 InGame 处理命令；注入要赶在输入快照合并之前
            .add_systems(
                Update,
                execute_cli_commands
                    .before(GameSet::Input)
                    .run_if(in_state(AppState::InGame)),
            );
    }
}

/* ---------------------------- 事件与枚举 ---------------------------- */

/// 终端敲的一整行
#[derive(Event)]
struct CliLine(String);

/// 我们支持的命令
enum Command {
    Help,
    Status,
    Exit,
    Items(Option<String>), // None=全部；Some(token)=按 id/uuid/name 查询
    Gear,
    Move { h: f32, v: f32 },
    Jump,
    Sprint,
    Combat,
    Punch,
    Equip,
    Store,
    Unsupported(String),
}

/* ---------------------------- 读取 stdin ---------------------------- */

fn read_stdin(mut writer: EventWriter<CliLine>) {
    let mut buffer = CLI_BUFFER.lock().unwrap();
    while let Some(line) = buffer.pop_front() {
        writer.write(CliLine(line));
    }
}

/* ---------------------------- 命令执行 ---------------------------- */

fn execute_cli_commands(
    mut line_reader: EventReader<CliLine>,
    mut app_exit: EventWriter<AppExit>,
    mut log: EventWriter<LogEvent>,
    mut inject: EventWriter<InjectInput>,
    state: Res<State<AppState>>,
    item_assets: Res<ItemAssets>,
    lists: Res<Assets<ItemList>>,
    popup: Res<Popup>,
    prompt: Res<InteractionPrompt>,
    player: Query<(&CharacterState, &ComboState, &Gear), With<Player>>,
    names: Query<&Pickup>,
) {
    for CliLine(input) in line_reader.read() {
        match parse_command(input) {
            Command::Help => {
                log.write(LogEvent(
                    "命令列表:
  help                   查看帮助
  status                 查看当前状态
  exit / quit            退出程序
  items                  列出所有物品
  items <token>          用 id / uuid / 名称 查询单个物品
  gear                   查看手上与收纳队列
  move <h> <v>           注入一帧移动轴
  jump / sprint          注入跳跃 / 冲刺
  combat                 切换战斗姿态
  punch                  出拳（需战斗姿态）
  equip / store          拾取 / 收纳切换
  ".into()));
            }

            Command::Status => {
                let Ok((st, combo, _)) = player.single() else {
                    log.write(LogEvent("玩家尚未生成".into()));
                    continue;
                };
                log.write(LogEvent(format!(
                    "State: {:?}, Combat: {}, Grounded: {}, Airborne: {}, ComboStep: {}, Popup: {:?}({:.2}), Prompt: {}",
                    state.get(),
                    st.combat,
                    st.grounded,
                    st.airborne,
                    combo.step,
                    popup.phase,
                    popup.alpha,
                    if prompt.visible { prompt.text.as_str() } else { "-" },
                )));
            }

            Command::Exit => {
                log.write(LogEvent("Bye~".into()));
                app_exit.write(AppExit::Error(NonZero::<u8>::MIN));
            }

            Command::Items(token) => {
                if let Some(handle) = &item_assets.items {
                    if let Some(list) = lists.get(handle) {
                        match token {
                            None => {
                                // 全部列出
                                for entry in &list.items {
                                    let uuid = uuid_from_id(&entry.id);
                                    log.write(LogEvent(format!(
                                        "{} | {} | {}",
                                        uuid, entry.id, entry.name
                                    )));
                                }
                            }
                            Some(t) => {
                                // 按三种字段模糊匹配
                                let t_low = t.to_lowercase();
                                if let Some(e) = list.items.iter().find(|e| {
                                    e.id.eq_ignore_ascii_case(&t_low)
                                        || e.name.eq_ignore_ascii_case(&t_low)
                                        || uuid_from_id(&e.id).to_string() == t_low
                                }) {
                                    let uuid = uuid_from_id(&e.id);
                                    log.write(LogEvent(format!(
                                        "==================================================
UUID : {uuid}
ID   : {}
Name : {}
Pos  : {:?}
==================================================",
                                        e.id, e.name, e.pos
                                    )));
                                } else {
                                    log.write(LogEvent("未找到匹配物品".into()));
                                }
                            }
                        }
                    }
                }
            }

            Command::Gear => {
                let Ok((_, _, gear)) = player.single() else {
                    log.write(LogEvent("玩家尚未生成".into()));
                    continue;
                };
                let held = gear
                    .equipped
                    .and_then(|e| names.get(e).ok())
                    .map_or("(empty)".to_string(), |p| p.name.clone());
                let backlog: Vec<String> = gear
                    .backlog
                    .iter()
                    .filter_map(|e| names.get(*e).ok())
                    .map(|p| p.name.clone())
                    .collect();
                log.write(LogEvent(format!(
                    "手上: {held}
收纳队列: {}",
                    if backlog.is_empty() {
                        "(empty)".to_string()
                    } else {
                        backlog.join(" ← ")
                    }
                )));
            }

            Command::Move { h, v } => {
                inject.write(InjectInput::Move { h, v });
            }
            Command::Jump => {
                inject.write(InjectInput::Jump);
            }
            Command::Sprint => {
                inject.write(InjectInput::Sprint);
            }
            Command::Combat => {
                inject.write(InjectInput::CombatToggle);
            }
            Command::Punch => {
                inject.write(InjectInput::Attack);
            }
            Command::Equip => {
                inject.write(InjectInput::Equip);
            }
            Command::Store => {
                inject.write(InjectInput::Store);
            }

            Command::Unsupported(cmd) => {
                log.write(LogEvent(format!("不支持的命令: {cmd}")));
            }
        }
    }
}

/* ---------------------------- 工具函数 ---------------------------- */

fn parse_command(input: &str) -> Command {
    let mut parts = input.split_whitespace();
    let cmd = parts.next().unwrap_or("").to_lowercase();
    match cmd.as_str() {
        "help" | "h" | "?" => Command::Help,
        "status" | "s" => Command::Status,
        "exit" | "quit" | "q" => Command::Exit,
        "items" | "item" | "i" => {
            let token = parts.next().map(|s| s.to_string());
            Command::Items(token)
        }
        "gear" | "inv" => Command::Gear,
        "move" | "m" => {
            let h = parts.next().unwrap_or("0").parse().unwrap_or(0.0);
            let v = parts.next().unwrap_or("1").parse().unwrap_or(1.0);
            Command::Move { h, v }
        }
        "jump" | "j" => Command::Jump,
        "sprint" => Command::Sprint,
        "combat" | "f" => Command::Combat,
        "punch" | "p" => Command::Punch,
        "equip" | "g" => Command::Equip,
        "store" | "k" => Command::Store,
        other => Command::Unsupported(other.into()),
    }
}

fn uuid_from_id(id: &str) -> Uuid {
    // 用固定 namespace + id 字节生成版本 5 UUID，保证可重复得到同一值
    Uuid::new_v5(&Uuid::NAMESPACE_OID, id.as_bytes())
}
