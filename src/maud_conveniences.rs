use maud::{Markup, Render, html};

pub fn render_table<const N: usize>(
    titles: [&'static str; N],
    items: Vec<[Markup; N]>,
    empty_message: &'static str,
) -> Markup {
    html! {
        div class="overflow-x-auto" {
            table class="min-w-full text-black" {
                thead {
                    tr class="text-gray-400 text-left" {
                        @for title in titles {
                            th class="p-3 font-bold uppercase text-sm md:text-base lg:text-lg" {(title)}
                        }
                    }
                }
                tbody {
                    @if items.is_empty() {
                        tr {
                            td colspan=(N) class="text-center p-4" {(empty_message)}
                        }
                    } @else {
                        @for row in items {
                            tr class="border-t-2" {
                                @for col in row {
                                    td class="p-3 text-sm md:text-base lg:text-lg" {(col)}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn title(s: impl Render) -> Markup {
    html! {
        h2 class="text-2xl font-semibold mb-4 text-gray-700" {(s)}
    }
}

pub fn simple_form_element(
    name: &'static str,
    label: &'static str,
    input_type: Option<&'static str>,
    value: Option<&str>,
) -> Markup {
    html! {
        div class="mb-4" {
            label for=(name) class="block text-black" {(label)}
            input required type=(input_type.unwrap_or("text")) id=(name) name=(name) value=[value] placeholder=(label) class="bg-white text-black rounded shadow-md p-2 w-full" {}
        }
    }
}

pub fn select_form_element(
    name: &'static str,
    label: &'static str,
    placeholder: &'static str,
    options: &[&str],
    selected: Option<&str>,
) -> Markup {
    html! {
        div class="mb-4" {
            label for=(name) class="block text-black" {(label)}
            select required id=(name) name=(name) class="bg-white text-black rounded shadow-md p-2 w-full" {
                option value="" disabled selected[selected.is_none()] {(placeholder)}
                @for option in options {
                    option value=(option) selected[selected == Some(*option)] {(option)}
                }
            }
        }
    }
}
