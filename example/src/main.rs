extern crate bytecolor;

use bytecolor::Color;

fn main() {
    let color = Color::new(0xfd, 0xd0, 0x17);

    println!("{}", color.byte_color());
}
