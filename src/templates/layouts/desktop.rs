use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Property Dashboard" }
                script src="https://cdn.tailwindcss.com" {}
            }
            body class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100" {
                header class="bg-white shadow-sm border-b border-gray-200" {
                    div class="max-w-7xl mx-auto px-6 py-4 flex items-center justify-between" {
                        a href="/" class="flex items-center gap-3" {
                            svg
                                xmlns="http://www.w3.org/2000/svg"
                                width="28"
                                height="28"
                                viewBox="0 0 24 24"
                                fill="none"
                                stroke="#4f46e5"
                                stroke-width="2"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                            {
                                path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                                path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                                path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                                path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                            }
                            h1 class="text-2xl font-bold text-gray-900" { "Property Dashboard" }
                        }
                    }
                }
                (content)
            }
        }
    }
}
