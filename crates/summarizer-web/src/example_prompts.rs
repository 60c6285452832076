/// Built-in example prompts
///
/// Sample passages shown in the sidebar so a first-time user can try the
/// summarizer without pasting their own text.

use crate::types::ExampleEntry;

pub static EXAMPLES: [ExampleEntry; 3] = [
    ExampleEntry {
        title: "AI Technology",
        text: "Artificial Intelligence has evolved from a theoretical concept to a transformative technology that is reshaping industries and society. Modern AI systems, powered by deep learning and neural networks, can now perform tasks that were once thought to be exclusively human domains, including image recognition, natural language processing, and complex decision-making.",
    },
    ExampleEntry {
        title: "Climate Change",
        text: "Climate change represents one of the most significant challenges facing humanity in the 21st century. Rising global temperatures are causing widespread environmental disruptions, including melting polar ice caps, rising sea levels, and increasingly frequent extreme weather events.",
    },
    ExampleEntry {
        title: "Space Exploration",
        text: "Space exploration has entered a new era characterized by international collaboration, private sector innovation, and ambitious goals. Recent missions have successfully landed rovers on Mars, collected samples from asteroids, and deployed powerful telescopes that peer into the early universe.",
    },
];
