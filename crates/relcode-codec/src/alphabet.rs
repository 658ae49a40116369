//! The fixed emoji alphabet and the additive checksum.
//!
//! Glyph `i` carries the 10-bit value `i`. The reverse map is built on first
//! use. The checksum is the sum of data values modulo [`ALPHABET_LEN`], so it
//! always names a glyph.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Number of glyphs in the alphabet.
pub const ALPHABET_LEN: usize = 1025;

/// Bits carried by one data glyph.
pub const SYMBOL_BITS: u32 = 10;

/// Data and checksum glyphs, indexed by the value they carry.
///
/// Every glyph is a single code point with no variation selector, so codes
/// survive chat clients that add or strip U+FE0F. Any edit to this table,
/// including appending, breaks every code already shared.
#[rustfmt::skip]
pub static ALPHABET: [char; ALPHABET_LEN] = [
    '🆘', '🆙', '🆚', '🈁', '🈂', '🈚', '🈯', '🈲', '🈳', '🈴',
    '🈵', '🈶', '🈷', '🈸', '🈹', '🈺', '🉐', '🉑', '🌀', '🌁',
    '🌂', '🌃', '🌄', '🌅', '🌆', '🌇', '🌈', '🌉', '🌊', '🌋',
    '🌌', '🌍', '🌎', '🌏', '🌐', '🌑', '🌒', '🌓', '🌔', '🌕',
    '🌖', '🌗', '🌘', '🌙', '🌚', '🌛', '🌜', '🌝', '🌞', '🌟',
    '🌠', '🌡', '🌤', '🌥', '🌦', '🌧', '🌨', '🌩', '🌪', '🌫',
    '🌬', '🌭', '🌮', '🌯', '🌰', '🌱', '🌲', '🌳', '🌴', '🌵',
    '🌶', '🌷', '🌸', '🌹', '🌺', '🌻', '🌼', '🌽', '🌾', '🌿',
    '🍀', '🍁', '🍂', '🍃', '🍄', '🍅', '🍆', '🍇', '🍈', '🍉',
    '🍊', '🍋', '🍌', '🍍', '🍎', '🍏', '🍐', '🍑', '🍒', '🍓',
    '🍔', '🍕', '🍖', '🍗', '🍘', '🍙', '🍚', '🍛', '🍜', '🍝',
    '🍞', '🍟', '🍠', '🍡', '🍢', '🍣', '🍤', '🍥', '🍦', '🍧',
    '🍨', '🍩', '🍪', '🍫', '🍬', '🍭', '🍮', '🍯', '🍰', '🍱',
    '🍲', '🍳', '🍴', '🍵', '🍶', '🍷', '🍸', '🍹', '🍺', '🍻',
    '🍼', '🍽', '🍾', '🍿', '🎀', '🎁', '🎂', '🎃', '🎄', '🎅',
    '🎆', '🎇', '🎈', '🎉', '🎊', '🎋', '🎌', '🎍', '🎎', '🎏',
    '🎐', '🎑', '🎒', '🎓', '🎖', '🎗', '🎙', '🎚', '🎛', '🎞',
    '🎟', '🎠', '🎡', '🎢', '🎣', '🎤', '🎥', '🎦', '🎧', '🎨',
    '🎩', '🎪', '🎫', '🎬', '🎭', '🎮', '🎯', '🎰', '🎱', '🎲',
    '🎳', '🎴', '🎵', '🎶', '🎷', '🎸', '🎹', '🎺', '🎻', '🎼',
    '🎽', '🎾', '🎿', '🏀', '🏁', '🏂', '🏃', '🏄', '🏅', '🏆',
    '🏇', '🏈', '🏉', '🏊', '🏋', '🏌', '🏍', '🏎', '🏏', '🏐',
    '🏑', '🏒', '🏓', '🏔', '🏕', '🏖', '🏗', '🏘', '🏙', '🏚',
    '🏛', '🏜', '🏝', '🏞', '🏟', '🏠', '🏡', '🏢', '🏣', '🏤',
    '🏥', '🏦', '🏧', '🏨', '🏩', '🏪', '🏫', '🏬', '🏭', '🏮',
    '🏯', '🏰', '🏳', '🏴', '🏵', '🏷', '🏸', '🏹', '🏺', '🐀',
    '🐁', '🐂', '🐃', '🐄', '🐅', '🐆', '🐇', '🐈', '🐉', '🐊',
    '🐋', '🐌', '🐍', '🐎', '🐏', '🐐', '🐑', '🐒', '🐓', '🐔',
    '🐕', '🐖', '🐗', '🐘', '🐙', '🐚', '🐛', '🐜', '🐝', '🐞',
    '🐟', '🐠', '🐡', '🐢', '🐣', '🐤', '🐥', '🐦', '🐧', '🐨',
    '🐩', '🐪', '🐫', '🐬', '🐭', '🐮', '🐯', '🐰', '🐱', '🐲',
    '🐳', '🐴', '🐵', '🐶', '🐷', '🐸', '🐹', '🐺', '🐻', '🐼',
    '🐽', '🐾', '🐿', '👀', '👁', '👂', '👃', '👄', '👅', '👆',
    '👇', '👈', '👉', '👊', '👋', '👌', '👍', '👎', '👏', '👐',
    '👑', '👒', '👓', '👔', '👕', '👖', '👗', '👘', '👙', '👚',
    '👛', '👜', '👝', '👞', '👟', '👠', '👡', '👢', '👣', '👤',
    '👥', '👦', '👧', '👨', '👩', '👪', '👫', '👬', '👭', '👮',
    '👯', '👰', '👱', '👲', '👳', '👴', '👵', '👶', '👷', '👸',
    '👹', '👺', '👻', '👼', '👽', '👾', '👿', '💀', '💁', '💂',
    '💃', '💄', '💅', '💆', '💇', '💈', '💉', '💊', '💋', '💌',
    '💍', '💎', '💏', '💐', '💑', '💒', '💓', '💔', '💕', '💖',
    '💗', '💘', '💙', '💚', '💛', '💜', '💝', '💞', '💟', '💠',
    '💡', '💢', '💣', '💤', '💥', '💦', '💧', '💨', '💩', '💪',
    '💫', '💬', '💭', '💮', '💯', '💰', '💱', '💲', '💳', '💴',
    '💵', '💶', '💷', '💸', '💹', '💺', '💻', '💼', '💽', '💾',
    '💿', '📀', '📁', '📂', '📃', '📄', '📅', '📆', '📇', '📈',
    '📉', '📊', '📋', '📌', '📍', '📎', '📏', '📐', '📑', '📒',
    '📓', '📔', '📕', '📖', '📗', '📘', '📙', '📚', '📛', '📜',
    '📝', '📞', '📟', '📠', '📡', '📢', '📣', '📤', '📥', '📦',
    '📧', '📨', '📩', '📪', '📫', '📬', '📭', '📮', '📯', '📰',
    '📱', '📲', '📳', '📴', '📵', '📶', '📷', '📸', '📹', '📺',
    '📻', '📼', '📽', '📿', '🔀', '🔁', '🔂', '🔃', '🔄', '🔅',
    '🔆', '🔇', '🔈', '🔉', '🔊', '🔋', '🔌', '🔍', '🔎', '🔏',
    '🔐', '🔑', '🔒', '🔓', '🔔', '🔕', '🔖', '🔗', '🔘', '🔙',
    '🔚', '🔛', '🔜', '🔝', '🔞', '🔟', '🔠', '🔡', '🔢', '🔣',
    '🔤', '🔥', '🔦', '🔧', '🔨', '🔩', '🔪', '🔫', '🔬', '🔭',
    '🔮', '🔯', '🔰', '🔱', '🔲', '🔳', '🔴', '🔵', '🔶', '🔷',
    '🔸', '🔹', '🔺', '🔻', '🔼', '🔽', '🕉', '🕊', '🕋', '🕌',
    '🕍', '🕎', '🕐', '🕑', '🕒', '🕓', '🕔', '🕕', '🕖', '🕗',
    '🕘', '🕙', '🕚', '🕛', '🕜', '🕝', '🕞', '🕟', '🕠', '🕡',
    '🕢', '🕣', '🕤', '🕥', '🕦', '🕧', '🕯', '🕰', '🕳', '🕴',
    '🕵', '🕶', '🕷', '🕸', '🕹', '🕺', '🖇', '🖊', '🖋', '🖌',
    '🖍', '🖐', '🖕', '🖖', '🖤', '🖥', '🖨', '🖱', '🖲', '🖼',
    '🗂', '🗃', '🗄', '🗑', '🗒', '🗓', '🗜', '🗝', '🗞', '🗡',
    '🗣', '🗨', '🗯', '🗳', '🗺', '🗻', '🗼', '🗽', '🗾', '🗿',
    '😀', '😁', '😂', '😃', '😄', '😅', '😆', '😇', '😈', '😉',
    '😊', '😋', '😌', '😍', '😎', '😏', '😐', '😑', '😒', '😓',
    '😔', '😕', '😖', '😗', '😘', '😙', '😚', '😛', '😜', '😝',
    '😞', '😟', '😠', '😡', '😢', '😣', '😤', '😥', '😦', '😧',
    '😨', '😩', '😪', '😫', '😬', '😭', '😮', '😯', '😰', '😱',
    '😲', '😳', '😴', '😵', '😶', '😷', '😸', '😹', '😺', '😻',
    '😼', '😽', '😾', '😿', '🙀', '🙁', '🙂', '🙃', '🙄', '🙅',
    '🙆', '🙇', '🙈', '🙉', '🙊', '🙋', '🙌', '🙍', '🙎', '🙏',
    '🚀', '🚁', '🚂', '🚃', '🚄', '🚅', '🚆', '🚇', '🚈', '🚉',
    '🚊', '🚋', '🚌', '🚍', '🚎', '🚏', '🚐', '🚑', '🚒', '🚓',
    '🚔', '🚕', '🚖', '🚗', '🚘', '🚙', '🚚', '🚛', '🚜', '🚝',
    '🚞', '🚟', '🚠', '🚡', '🚢', '🚣', '🚤', '🚥', '🚦', '🚧',
    '🚨', '🚩', '🚪', '🚫', '🚬', '🚭', '🚮', '🚯', '🚰', '🚱',
    '🚲', '🚳', '🚴', '🚵', '🚶', '🚷', '🚸', '🚹', '🚺', '🚻',
    '🚼', '🚽', '🚾', '🚿', '🛀', '🛁', '🛂', '🛃', '🛄', '🛅',
    '🛋', '🛌', '🛍', '🛎', '🛏', '🛐', '🛑', '🛒', '🛠', '🛡',
    '🛢', '🛣', '🛤', '🛥', '🛩', '🛫', '🛬', '🛰', '🛳', '🛴',
    '🛵', '🛶', '🛷', '🛸', '🛹', '🤐', '🤑', '🤒', '🤓', '🤔',
    '🤕', '🤖', '🤗', '🤘', '🤙', '🤚', '🤛', '🤜', '🤝', '🤞',
    '🤟', '🤠', '🤡', '🤢', '🤣', '🤤', '🤥', '🤦', '🤧', '🤨',
    '🤩', '🤪', '🤫', '🤬', '🤭', '🤮', '🤯', '🤰', '🤱', '🤲',
    '🤳', '🤴', '🤵', '🤶', '🤷', '🤸', '🤹', '🤺', '🤼', '🤽',
    '🤾', '🥀', '🥁', '🥂', '🥃', '🥄', '🥅', '🥇', '🥈', '🥉',
    '🥊', '🥋', '🥌', '🥍', '🥎', '🥏', '🥐', '🥑', '🥒', '🥓',
    '🥔', '🥕', '🥖', '🥗', '🥘', '🥙', '🥚', '🥛', '🥜', '🥝',
    '🥞', '🥟', '🥠', '🥡', '🥢', '🥣', '🥤', '🥥', '🥦', '🥧',
    '🥨', '🥩', '🥪', '🥫', '🥬', '🥭', '🥮', '🥯', '🥰', '🥳',
    '🥴', '🥵', '🥶', '🥺', '🥼', '🥽', '🥾', '🥿', '🦀', '🦁',
    '🦂', '🦃', '🦄', '🦅', '🦆', '🦇', '🦈', '🦉', '🦊', '🦋',
    '🦌', '🦍', '🦎', '🦏', '🦐', '🦑', '🦒', '🦓', '🦔', '🦕',
    '🦖', '🦗', '🦘', '🦙', '🦚', '🦛', '🦜', '🦝', '🦞', '🦟',
    '🦠', '🦡', '🦢', '🦰', '🦱', '🦲', '🦳', '🦴', '🦵', '🦶',
    '🦷', '🦸', '🦹', '🧀', '🧁', '🧂', '🧐', '🧑', '🧒', '🧓',
    '🧔', '🧕', '🧖', '🧗', '🧘', '🧙', '🧚', '🧛', '🧜', '🧝',
    '🧞', '🧟', '🧠', '🧡', '🧢', '🧣', '🧤', '🧥', '🧦', '🧧',
    '🧨', '🧩', '🧪', '🧫', '🧬', '🧭', '🧮', '🧯', '🧰', '🧱',
    '🧲', '🧳', '🧴', '🧵', '🧶', '🧷', '🧸', '🧹', '🧺', '🧻',
    '🧼', '🧽', '🧾', '🧿', '🆗',
];

fn reverse_index() -> &'static HashMap<char, u16> {
    static REVERSE: OnceLock<HashMap<char, u16>> = OnceLock::new();
    REVERSE.get_or_init(|| {
        ALPHABET
            .iter()
            .enumerate()
            .map(|(index, &glyph)| (glyph, index as u16))
            .collect()
    })
}

/// Glyph for a symbol value. Values past the table map to glyph 0.
pub fn glyph(index: u16) -> char {
    ALPHABET
        .get(usize::from(index))
        .copied()
        .unwrap_or(ALPHABET[0])
}

/// Symbol value of a glyph, if it belongs to the alphabet.
pub fn index_of(glyph: char) -> Option<u16> {
    reverse_index().get(&glyph).copied()
}

/// Sum of symbol values reduced modulo [`ALPHABET_LEN`].
pub fn checksum(indices: &[u16]) -> u16 {
    let sum: u64 = indices.iter().map(|&index| u64::from(index)).sum();
    (sum % ALPHABET_LEN as u64) as u16
}
