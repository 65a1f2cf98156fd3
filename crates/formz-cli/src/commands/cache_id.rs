use formz::FormzContext;

pub fn execute(context: &FormzContext, type_name: &str, prefix: &str) {
    println!("{}", context.cache_identifier(prefix, type_name));
}
