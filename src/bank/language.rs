//! Language and literature templates.

use super::{Band, McTemplate, TfTemplate};

const TF: &[TfTemplate] = &[
  tf!("Al leer un texto sobre {topic} conviene identificar la idea principal.", true,
    "La idea principal resume lo esencial del texto."),
  tf!("En un texto sobre {topic}, la ortografía no influye en la comprensión.", false,
    "Una escritura correcta facilita la comprensión del lector."),
  tf!("Los conectores ayudan a ordenar las ideas al escribir sobre {topic}.", true,
    "Conectores como \"además\" o \"por lo tanto\" enlazan ideas."),
  tf!("Un resumen de {topic} debe ser más largo que el texto original.", false,
    "Un resumen reduce el texto a sus ideas principales."),
  tf!("Para escribir sobre {topic} es útil planificar antes de redactar.", true,
    "Planificar permite organizar el contenido antes de escribir."),
  tf!("Releer y corregir un texto sobre {topic} mejora su calidad.", true,
    "La revisión permite detectar errores y mejorar la claridad."),
];

const MC: &[McTemplate] = &[
  mc!("Al analizar un texto sobre {topic}, ¿qué es la idea principal?",
    ["El tema central que el autor quiere comunicar", "La primera palabra del texto", "El título del libro", "Un detalle sin importancia"], 0),
  mc!("¿Qué tipo de texto conviene para explicar {topic}?",
    ["Un texto publicitario", "Un texto informativo", "Una adivinanza", "Un trabalenguas"], 1),
  mc!("Al escribir sobre {topic}, ¿cuál es la función de un párrafo?",
    ["Repetir el título", "Eliminar ideas", "Desarrollar una idea", "Reemplazar la conclusión"], 2),
  mc!("¿Qué se debe hacer al terminar de escribir sobre {topic}?",
    ["Entregarlo sin leer", "Borrar la introducción", "Cambiar el tema", "Revisar y corregir el texto"], 3),
];

pub static BANDS: &[Band] = &[Band { min: 1, max: 5, tf: TF, mc: MC, ms: &[] }];

const TF_EN: &[TfTemplate] = &[
  tf!("When reading a text about {topic} it helps to identify the main idea.", true,
    "The main idea sums up what matters most in the text."),
  tf!("In a text about {topic}, spelling has no effect on comprehension.", false,
    "Correct writing makes the text easier to understand."),
  tf!("Connectors help order ideas when writing about {topic}.", true,
    "Connectors such as \"also\" or \"therefore\" link ideas."),
  tf!("A summary of {topic} should be longer than the original text.", false,
    "A summary reduces a text to its main ideas."),
  tf!("Planning before drafting helps when writing about {topic}.", true,
    "Planning organizes the content before writing."),
];

const MC_EN: &[McTemplate] = &[
  mc!("When analyzing a text about {topic}, what is the main idea?",
    ["The central point the author wants to convey", "The first word of the text", "The title of the book", "An unimportant detail"], 0),
  mc!("Which kind of text suits explaining {topic}?",
    ["An advertisement", "An informative text", "A riddle", "A tongue twister"], 1),
  mc!("When writing about {topic}, what is a paragraph for?",
    ["Repeating the title", "Removing ideas", "Developing one idea", "Replacing the conclusion"], 2),
  mc!("What should you do after writing about {topic}?",
    ["Hand it in without reading it", "Delete the introduction", "Change the subject", "Review and correct the text"], 3),
];

pub static BANDS_EN: &[Band] = &[Band { min: 1, max: 5, tf: TF_EN, mc: MC_EN, ms: &[] }];
