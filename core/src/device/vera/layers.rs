use super::Vera;

/// Derived, cacheable per-layer state: decoded from the 7 raw registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayerRecord {
    pub signature: u32,
    pub depth_bpp: u8, // 1, 2, 4, or 8
    pub bitmap_mode: bool,
    pub text_mode: bool,
    pub map_base: u32,
    pub tile_base: u32,
    pub map_w_log2: u8,
    pub map_h_log2: u8,
    pub tile_w: u8, // 8 or 16
    pub tile_h: u8,
    pub scroll_x: u16,
    pub scroll_y: u16,
}

impl LayerRecord {
    fn from_regs(regs: &[u8; 7]) -> Self {
        let config = regs[0];
        let tile_size = regs[1];
        let signature = (config as u32)
            | ((tile_size as u32) << 8)
            | ((regs[2] as u32) << 16)
            | ((regs[3] as u32) << 24);
        LayerRecord {
            signature,
            depth_bpp: match config & 0x03 {
                0 => 1,
                1 => 2,
                2 => 4,
                _ => 8,
            },
            bitmap_mode: config & 0x04 != 0,
            text_mode: config & 0x08 != 0,
            map_w_log2: 5 + ((config >> 4) & 0x03),
            map_h_log2: 5 + ((config >> 6) & 0x03),
            tile_w: if tile_size & 0x01 != 0 { 16 } else { 8 },
            tile_h: if tile_size & 0x02 != 0 { 16 } else { 8 },
            map_base: (regs[2] as u32) << 9,
            tile_base: (regs[3] as u32) << 9,
            scroll_x: regs[4] as u16,
            scroll_y: regs[5] as u16,
        }
    }
}

impl Vera {
    /// Write one of the 7 per-layer registers, keying the property cache by
    /// the signature assembled from config/tile_size/map_base/tile_base (the
    /// first 4 registers). Scroll registers (4 and 5) update in place
    /// without touching the cache.
    pub(super) fn write_layer_reg(&mut self, layer: usize, offset: usize, value: u8) {
        let old_sig = LayerRecord::from_regs(&self.layer_regs[layer]).signature;
        self.layer_regs[layer][offset] = value;

        if offset == 4 || offset == 5 {
            if let Some(rec) = &mut self.layers[layer] {
                rec.scroll_x = self.layer_regs[layer][4] as u16;
                rec.scroll_y = self.layer_regs[layer][5] as u16;
            }
            return;
        }

        let new_sig = LayerRecord::from_regs(&self.layer_regs[layer]).signature;
        if new_sig == old_sig {
            return;
        }

        if let Some(old) = self.layers[layer].take() {
            if self.layer_lru.len() >= 16 {
                self.layer_lru.remove(0);
            }
            self.layer_lru.push((old.signature, old));
        }

        if let Some(pos) = self.layer_lru.iter().position(|(sig, _)| *sig == new_sig) {
            let (_, mut rec) = self.layer_lru.remove(pos);
            rec.scroll_x = self.layer_regs[layer][4] as u16;
            rec.scroll_y = self.layer_regs[layer][5] as u16;
            self.layers[layer] = Some(rec);
        } else {
            self.layers[layer] = Some(LayerRecord::from_regs(&self.layer_regs[layer]));
        }
    }

    pub fn layer(&mut self, index: usize) -> LayerRecord {
        if self.layers[index].is_none() {
            self.layers[index] = Some(LayerRecord::from_regs(&self.layer_regs[index]));
        }
        self.layers[index].unwrap()
    }

    pub(super) fn invalidate_on_write(&mut self, addr: u32) {
        for i in 0..2 {
            if let Some(rec) = self.layers[i] {
                let map_bytes_per_tile = if rec.text_mode { 2 } else { 1 };
                let map_tiles = (1u32 << rec.map_w_log2) * (1u32 << rec.map_h_log2);
                let map_len = map_tiles * map_bytes_per_tile;
                let in_map = addr >= rec.map_base && addr < rec.map_base + map_len;
                if in_map {
                    // A tile-map write only touches this layer's map read view;
                    // no pre-rendered back buffer is cached for it here, so
                    // no further action is required beyond the shadow update.
                    continue;
                }
            }
        }
        for i in 0..128 {
            if let Some(rec) = self.sprites[i]
                && addr >= rec.bitmap_base
                && addr < rec.bitmap_base + rec.bitmap_len
            {
                self.sprites[i] = None;
            }
        }
    }
}
