use cardatlas::{
    AtlasLayout, AtlasRegion, Card, CardIndex, CardLike, Table, decode_index, encode_hand,
    encode_index, is_sorted, sort_hand,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmAtlas {
    table: Table,
    layout: AtlasLayout,
}

#[wasm_bindgen]
impl WasmAtlas {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            table: Table::standard(),
            layout: AtlasLayout::default(),
        }
    }

    pub fn set_layout(
        &mut self,
        left_margin: i32,
        top_margin: i32,
        cell_height: u32,
        cell_width: u32,
        h_spacing: u32,
        v_spacing: u32,
    ) {
        self.layout = AtlasLayout::default()
            .with_margins(left_margin, top_margin)
            .with_cell_size(cell_height, cell_width)
            .with_spacing(h_spacing, v_spacing);
    }

    pub fn suits(&self) -> Result<JsValue, JsValue> {
        to_js_value(&self.table.suit_labels())
    }

    pub fn ranks(&self) -> Result<JsValue, JsValue> {
        to_js_value(&self.table.rank_labels())
    }

    pub fn encode(&self, suit: &str, rank: &str) -> Result<u32, JsValue> {
        encode_index(&self.table, &(suit, rank))
            .map(|index| u32::from(index.get()))
            .map_err(js_err)
    }

    pub fn decode(&self, index: u32) -> Result<JsValue, JsValue> {
        let card = decode_index(&self.table, index as usize).map_err(js_err)?;
        to_js_value(&JsCard::from(card))
    }

    pub fn encode_hand(&self, hand: JsValue) -> Result<Vec<u32>, JsValue> {
        let hand = from_js_hand(hand)?;
        encode_hand(&self.table, &hand)
            .map(|indices| indices.into_iter().map(|i| u32::from(i.get())).collect())
            .map_err(js_err)
    }

    pub fn sort_hand(&self, hand: JsValue) -> Result<JsValue, JsValue> {
        let hand = from_js_hand(hand)?;
        let sorted = sort_hand(&self.table, &hand).map_err(js_err)?;
        to_js_value(&sorted)
    }

    pub fn is_sorted(&self, hand: JsValue) -> Result<bool, JsValue> {
        let hand = from_js_hand(hand)?;
        is_sorted(&self.table, &hand).map_err(js_err)
    }

    pub fn locate(&self, row: u32, col: u32) -> Result<JsValue, JsValue> {
        to_js_value(&JsRegion::from(self.layout.locate(row, col)))
    }

    pub fn locate_index(&self, index: u32) -> Result<JsValue, JsValue> {
        let index = CardIndex::try_from(index as usize).map_err(js_err)?;
        to_js_value(&JsRegion::from(self.layout.locate_index(index)))
    }

    pub fn locate_hand(&self, hand: JsValue) -> Result<JsValue, JsValue> {
        let hand = from_js_hand(hand)?;
        let regions: Vec<JsRegion> = self
            .layout
            .locate_hand(&hand)
            .map_err(js_err)?
            .into_iter()
            .map(JsRegion::from)
            .collect();
        to_js_value(&regions)
    }
}

impl Default for WasmAtlas {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize, Deserialize, Clone)]
struct JsCard {
    suit: String,
    rank: String,
}

impl CardLike for JsCard {
    fn suit_label(&self) -> &str {
        &self.suit
    }

    fn rank_label(&self) -> &str {
        &self.rank
    }
}

impl From<Card> for JsCard {
    fn from(card: Card) -> Self {
        Self {
            suit: card.suit.label().to_owned(),
            rank: card.rank.label().to_owned(),
        }
    }
}

#[derive(Serialize, Debug, PartialEq, Eq)]
struct JsRegion {
    top: i64,
    left: i64,
    bottom: i64,
    right: i64,
}

impl From<AtlasRegion> for JsRegion {
    fn from(region: AtlasRegion) -> Self {
        Self {
            top: region.top,
            left: region.left,
            bottom: region.bottom,
            right: region.right,
        }
    }
}

fn from_js_hand(hand: JsValue) -> Result<Vec<JsCard>, JsValue> {
    serde_wasm_bindgen::from_value(hand).map_err(|err| JsValue::from_str(&err.to_string()))
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
