//! Narrative lines shown by the resolver.

use crate::catalog::Item;

pub const OPENING: &str = "头好痛... 我这是在哪里？";

pub const GATE_LOCKED: &str = "大门从外面锁上了，推不开。";
pub const WALL_TOO_HIGH: &str = "墙太高了，翻不过去。";

pub const FIREPIT_ASHES: &str = "火盆里只剩下灰烬。";
pub const CLOCK_LOCKED: &str = "钟表的玻璃罩锁住了，似乎和旁边的太师椅机关有关。";
pub const CLOCK_STOPPED: &str = "钟停在了两点。";
pub const CHAIR_KEY_FOUND: &str = "在椅垫缝隙里摸索... 竟然找到了一把钥匙！";
pub const CHAIRS_NEED_DRAWING: &str =
    "这些椅子的刻纹似乎对应着某种方位... 但我现在没有参照图。也许该去别的房间找找。";
pub const CHAIRS_ARRANGED: &str = "椅子已经按陈列图摆放整齐了，机关已解开。";

pub const BEDSIDE_LOCKED: &str = "床头柜锁死了，打不开。";

pub const VASE_CANDLES: &str = "花瓶里藏着两根蜡烛。";
pub const VASE_EMPTY: &str = "花瓶空了。";
pub const SECRET_DOOR_FOUND: &str = "根据构造图，这里应该有道暗门... 找到了！";
pub const WARDROBE_HEAVY: &str = "这里衣柜看起来很沉重。";

pub const ALTAR_DRAWER_EMPTY: &str = "抽屉已经空了。";
pub const MIRROR_REPAIRED: &str = "铜镜补全了。";
pub const MIRROR_BROKEN: &str = "桌面升起了一面残缺的铜镜...需要补全它。";
pub const CANDLES_NEED_FIRE: &str = "蜡烛放好了，需要点火。";
pub const CANDLE_HOLDERS: &str = "镜前有两个烛台。";

pub const STONES_BLACKOUT: &str = "这石头排列好奇怪... (突然眼前一黑)";
pub const BLACKOUT_WAKE: &str = "我又回到了井边？井水里好像有东西...";
pub const BOX_NEEDS_KEY: &str = "需要钥匙才能打开。";
pub const CLOCK_TABLET: &str = "钟表后面掉出了一块灵牌。";
pub const CHAIRS_UNLOCK_CLOCK: &str = "咔嚓一声，西洋钟的玻璃罩解锁了。";
pub const TABLETS_RAISE_MIRROR: &str = "机关启动的声音... 供桌中间升起了一面镜子。";
pub const DESK_FRAGMENT: &str = "获得 [铜镜碎片]。这好像是供桌上那面镜子的。";
pub const ALTAR_DRAWER_TABLET: &str = "在抽屉里发现了一块灵牌。";

pub const PLACED_CLOCK_TABLET: &str = "放上了灵牌(钱氏)。";
pub const PLACED_DRAWER_TABLET: &str = "放上了灵牌(李氏)。";
pub const TABLET_MISSING: &str = "我还需要找到缺失的灵牌。";

/// The line shown when an item enters the inventory.
#[must_use]
pub fn acquired(item: Item) -> String {
    format!("获得了 [{}]", item.display_name())
}
