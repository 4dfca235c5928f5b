/// Game-master line: something the moderator reads out or keeps to
/// themselves.
#[macro_export]
macro_rules! gm {
    () => {
        println!()
    };
    ($($arg:tt)*) => {{
        print!("[🧬] ");
        println!($($arg)*);
    }};
}
