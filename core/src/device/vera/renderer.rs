use super::{InterruptStatus, SCAN_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH, Vera};

const SCAN_HEIGHT: u32 = 525;
const SPRITE_LINE_BUDGET: i32 = 800;

impl Vera {
    /// Advance the fractional scan position by one pixel-clock tick. `ratio`
    /// is the mode-dependent pixel-clock-to-CPU-clock ratio (spec: VGA ~=
    /// 25.175/CPU MHz, NTSC ~= 12.6/CPU MHz). Returns true if a line was
    /// composed this call.
    pub fn step(&mut self, ratio: f64) -> bool {
        self.scan_x += ratio;
        if self.scan_x < SCAN_WIDTH {
            return false;
        }
        self.scan_x -= SCAN_WIDTH;
        self.scan_y += 1;

        if (self.scan_y as usize) < SCREEN_HEIGHT {
            self.compose_line(self.scan_y);
        }

        if self.scan_y == self.raster_compare as u32 {
            self.interrupts.isr |= InterruptStatus::LINE;
        }

        if self.scan_y == SCAN_HEIGHT {
            if self.interrupts.ien & InterruptStatus::VSYNC != 0 {
                self.interrupts.isr |= InterruptStatus::VSYNC;
            }
            self.frame += 1;
            self.scan_y = 0;
        }
        true
    }

    fn palette_rgb(&self, index: u8) -> (u8, u8, u8) {
        let base = 0x1FA00 + index as usize * 2;
        let lo = self.vram[base & (super::VRAM_SIZE - 1)];
        let hi = self.vram[(base + 1) & (super::VRAM_SIZE - 1)];
        let r = hi & 0x0F;
        let g = (lo >> 4) & 0x0F;
        let b = lo & 0x0F;
        (r << 4 | r, g << 4 | g, b << 4 | b)
    }

    fn sample_layer_pixel(&mut self, layer_idx: usize, x: i32, y: i32) -> u8 {
        let rec = self.layer(layer_idx);
        let eff_x = (x + rec.scroll_x as i32).rem_euclid(1 << rec.map_w_log2.min(12));
        let eff_y = (y + rec.scroll_y as i32).rem_euclid(1 << rec.map_h_log2.min(12));

        if rec.bitmap_mode {
            let stride = 1u32 << rec.map_w_log2;
            let pixel_index = eff_y as u32 * stride + eff_x as u32;
            return self.read_bpp_pixel(rec.tile_base, pixel_index, rec.depth_bpp);
        }

        let tiles_x = eff_x as u32 / rec.tile_w as u32;
        let tiles_y = eff_y as u32 / rec.tile_h as u32;
        let map_w_tiles = 1u32 << (rec.map_w_log2 as u32 - rec.tile_w.trailing_zeros());
        let bytes_per_entry = if rec.text_mode { 2 } else { 1 };
        let map_offset = rec.map_base + (tiles_y * map_w_tiles + tiles_x) * bytes_per_entry;
        let tile_index = self.vram_read(map_offset) as u32;

        let within_x = eff_x as u32 % rec.tile_w as u32;
        let within_y = eff_y as u32 % rec.tile_h as u32;
        let tile_pixels = rec.tile_w as u32 * rec.tile_h as u32;
        let tile_base = rec.tile_base + tile_index * tile_pixels * rec.depth_bpp as u32 / 8;
        let pixel_index = within_y * rec.tile_w as u32 + within_x;
        self.read_bpp_pixel(tile_base, pixel_index, rec.depth_bpp)
    }

    fn read_bpp_pixel(&self, base_addr: u32, pixel_index: u32, bpp: u8) -> u8 {
        match bpp {
            1 => {
                let idx = base_addr * 8 + pixel_index;
                self.shadow1[idx as usize & (self.shadow1.len() - 1)]
            }
            2 => {
                let idx = base_addr * 4 + pixel_index;
                self.shadow2[idx as usize & (self.shadow2.len() - 1)]
            }
            4 => {
                let idx = base_addr * 2 + pixel_index;
                self.shadow4[idx as usize & (self.shadow4.len() - 1)]
            }
            _ => self.vram_read(base_addr + pixel_index),
        }
    }

    fn compose_line(&mut self, y: u32) {
        let mut sprite_color = [0u8; SCREEN_WIDTH];
        let mut sprite_z = [0u8; SCREEN_WIDTH];
        let mut collision_acc = [0u8; SCREEN_WIDTH];
        let mut line_collisions = 0u8;

        let sprite_enable = self.composer_bank0[0] & 0x40 != 0;
        if sprite_enable {
            let mut budget = SPRITE_LINE_BUDGET;
            for i in 0..128 {
                if budget <= 0 {
                    break;
                }
                let sp = self.sprite(i);
                if sp.z == 0 {
                    continue;
                }
                let rows = sp.size as i32;
                if (y as i32) < sp.y || (y as i32) >= sp.y + rows {
                    continue;
                }
                budget -= 6; // lookup cost
                let row = (y as i32 - sp.y) as u32;
                let row = if sp.v_flip { sp.size as u32 - 1 - row } else { row };
                let mut last_fetch_block: Option<u32> = None;
                for col in 0..sp.size as i32 {
                    if budget <= 0 {
                        break;
                    }
                    let screen_x = sp.x + col;
                    if screen_x < 0 || screen_x as usize >= SCREEN_WIDTH {
                        continue;
                    }
                    let src_col = if sp.h_flip { sp.size as u32 - 1 - col as u32 } else { col as u32 };
                    let bpp = if sp.bpp8 { 8 } else { 4 };
                    let pixel_index = row * sp.size as u32 + src_col;
                    let byte_offset = if sp.bpp8 { pixel_index } else { pixel_index / 2 };
                    let fetch_block = byte_offset / 4; // one charge per 32-bit fetch
                    if last_fetch_block != Some(fetch_block) {
                        budget -= 1;
                        last_fetch_block = Some(fetch_block);
                    }
                    let idx = self.read_bpp_pixel(sp.bitmap_base, pixel_index, bpp);
                    budget -= 1;
                    if idx == 0 {
                        continue; // transparent
                    }
                    let sx = screen_x as usize;
                    if collision_acc[sx] & sp.collision_mask != 0 {
                        line_collisions |= collision_acc[sx] & sp.collision_mask;
                    }
                    collision_acc[sx] |= sp.collision_mask;

                    if sp.z >= sprite_z[sx] {
                        sprite_color[sx] = sp.palette_offset.wrapping_add(idx);
                        sprite_z[sx] = sp.z;
                    }
                }
            }
        }

        if line_collisions != 0 {
            self.sprite_collisions |= line_collisions;
            if self.interrupts.ien & InterruptStatus::SPRITE_COLLISION != 0 {
                self.interrupts.isr |= InterruptStatus::SPRITE_COLLISION;
                self.interrupts.isr = (self.interrupts.isr & 0x0F) | (line_collisions << 4);
            }
        }

        let layer0_enable = self.composer_bank0[0] & 0x10 != 0;
        let layer1_enable = self.composer_bank0[0] & 0x20 != 0;

        let hstart = (self.composer_bank1[0] as usize) * 4;
        let hstop = (self.composer_bank1[1] as usize) * 4;
        let border_color = self.composer_bank0[3];

        for x in 0..SCREEN_WIDTH {
            let in_visible = x >= hstart && x < hstop.max(hstart);
            let palette_index = if !in_visible {
                border_color
            } else {
                let l0 = if layer0_enable {
                    self.sample_layer_pixel(0, x as i32, y as i32)
                } else {
                    0
                };
                let l1 = if layer1_enable {
                    self.sample_layer_pixel(1, x as i32, y as i32)
                } else {
                    0
                };
                let sc = sprite_color[x];
                let sz = sprite_z[x];

                match sz {
                    3 => sc,
                    2 => {
                        if l1 != 0 {
                            l1
                        } else if sc != 0 {
                            sc
                        } else {
                            l0
                        }
                    }
                    1 => {
                        if l1 != 0 {
                            l1
                        } else {
                            sc
                        }
                    }
                    _ => {
                        if l1 != 0 {
                            l1
                        } else {
                            l0
                        }
                    }
                }
            };

            let (mut r, mut g, mut b) = self.palette_rgb(palette_index);

            if self.composer_bank0[0] & 0x04 != 0 {
                let avg = ((r as u16 + g as u16 + b as u16) / 3) as u8;
                r = avg;
                g = avg;
                b = avg;
            }

            let output_mode = self.composer_bank0[0] & 0x03;
            if output_mode == 0 {
                r = 0;
                g = 0;
                b = 255;
            } else if output_mode == 2 {
                let overscan_h = SCREEN_WIDTH * 67 / 1000;
                let overscan_v = SCREEN_HEIGHT * 5 / 100;
                if x < overscan_h
                    || x >= SCREEN_WIDTH - overscan_h
                    || (y as usize) < overscan_v
                    || (y as usize) >= SCREEN_HEIGHT - overscan_v
                {
                    r /= 4;
                    g /= 4;
                    b /= 4;
                }
            }

            let off = (y as usize * SCREEN_WIDTH + x) * 3;
            self.framebuffer[off] = r;
            self.framebuffer[off + 1] = g;
            self.framebuffer[off + 2] = b;
        }
    }
}
