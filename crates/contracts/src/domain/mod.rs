pub mod a025_material;
pub mod a026_pos_cart;
